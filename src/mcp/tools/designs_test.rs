use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

#[tokio::test]
async fn test_list_designs() {
    let call = request_for("list_designs", json!({"projectID": 2, "type": "HLDS"})).await;

    assert_eq!(call.method, Method::Get);
    assert_eq!(
        call.path,
        "/index.php?m=design&f=browse&t=json&projectID=2&type=HLDS"
    );
}

#[tokio::test]
async fn test_create_design() {
    let call = request_for(
        "create_design",
        json!({"projectID": 2, "name": "Storage layout", "type": "DBDS", "story": 14}),
    )
    .await;

    assert_eq!(call.path, "/index.php?m=design&f=create&t=json&projectID=2");
    assert_eq!(
        call.body,
        body(json!({"name": "Storage layout", "type": "DBDS", "story": 14}))
    );
}

/// Legacy deletes need `confirm=yes` or ZenTao only asks for confirmation.
#[tokio::test]
async fn test_delete_design_confirms() {
    let call = request_for("delete_design", json!({"designID": 9})).await;

    assert_eq!(call.method, Method::Get);
    assert_eq!(
        call.path,
        "/index.php?m=design&f=delete&t=json&designID=9&confirm=yes"
    );
}
