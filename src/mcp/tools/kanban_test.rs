use super::Method;
use super::testing::{RecordingBackend, body, invoke, request_for};
use serde_json::json;

#[tokio::test]
async fn test_create_kanban_card() {
    let call = request_for(
        "create_kanban_card",
        json!({"kanbanID": 1, "regionID": 2, "groupID": 3, "columnID": 4, "name": "Spike", "pri": 3}),
    )
    .await;

    assert_eq!(call.method, Method::Post);
    assert_eq!(
        call.path,
        "/index.php?m=kanban&f=createCard&t=json&kanbanID=1&regionID=2&groupID=3&columnID=4"
    );
    assert_eq!(call.body, body(json!({"name": "Spike", "pri": 3})));
}

/// Every move coordinate travels in the query string.
#[tokio::test]
async fn test_move_kanban_card_has_no_body() {
    let call = request_for(
        "move_kanban_card",
        json!({"cardID": 9, "fromColID": 1, "toColID": 2, "fromLaneID": 3, "toLaneID": 3, "kanbanID": 5}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=kanban&f=moveCard&t=json&cardID=9&fromColID=1&toColID=2&fromLaneID=3&toLaneID=3&kanbanID=5"
    );
    assert_eq!(call.body, None);
}

/// Column position is limited to `left` or `right`.
#[tokio::test]
async fn test_create_kanban_column_position_is_checked() {
    let backend = RecordingBackend::default();

    let err = invoke(
        &backend,
        "create_kanban_column",
        json!({"columnID": 4, "position": "above", "name": "QA"}),
    )
    .await
    .unwrap_err();

    assert_eq!(err.data, Some(json!({"parameter": "position"})));
    assert!(backend.calls().is_empty());
}

/// `noLimit` replaces a numeric WIP limit.
#[tokio::test]
async fn test_set_column_wip_without_limit() {
    let call = request_for("set_kanban_column_wip", json!({"columnID": 4, "noLimit": true})).await;

    assert_eq!(call.body, body(json!({"noLimit": "1"})));
}
