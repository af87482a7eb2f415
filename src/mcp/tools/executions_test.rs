use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

/// With only the execution ID the path is the bare legacy entry plus that ID.
#[tokio::test]
async fn test_get_execution_tasks_only_execution() {
    let call = request_for("get_execution_tasks", json!({"executionID": 7})).await;

    assert_eq!(call.method, Method::Get);
    assert_eq!(
        call.path,
        "/index.php?m=execution&f=task&t=json&executionID=7"
    );
    assert_eq!(call.body, None);
}

/// Filters follow the execution ID in declaration order.
#[tokio::test]
async fn test_get_execution_tasks_with_filters() {
    let call = request_for(
        "get_execution_tasks",
        json!({"executionID": 7, "status": "unclosed", "orderBy": "id_desc", "recPerPage": 20, "pageID": 2}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=execution&f=task&t=json&executionID=7&status=unclosed&orderBy=id_desc&recPerPage=20&pageID=2"
    );
}

/// The readjust switches are posted as `"1"`/`"0"`.
#[tokio::test]
async fn test_activate_execution_sends_digit_flags() {
    let call = request_for(
        "activate_execution",
        json!({"executionID": 3, "end": "2025-06-30", "readjustTime": true, "readjustTask": false}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=execution&f=activate&t=json&executionID=3"
    );
    assert_eq!(
        call.body,
        body(json!({"end": "2025-06-30", "readjustTime": "1", "readjustTask": "0"}))
    );
}

#[tokio::test]
async fn test_link_execution_stories() {
    let call = request_for(
        "link_execution_stories",
        json!({"executionID": 3, "stories": [4, 5.0]}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=execution&f=linkStory&t=json&objectID=3"
    );
    assert_eq!(call.body, body(json!({"stories": [4, 5]})));
}

/// Executions are created below their project.
#[tokio::test]
async fn test_create_execution_under_project() {
    let call = request_for(
        "create_execution",
        json!({"project": 2, "name": "Sprint 4", "begin": "2025-01-06", "end": "2025-01-17", "lifetime": "short"}),
    )
    .await;

    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, "/projects/2/executions");
    assert_eq!(
        call.body,
        body(json!({"name": "Sprint 4", "begin": "2025-01-06", "end": "2025-01-17", "lifetime": "short"}))
    );
}

#[tokio::test]
async fn test_unlink_execution_story() {
    let call = request_for(
        "unlink_execution_story",
        json!({"executionID": 3, "storyID": 8}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=execution&f=unlinkStory&t=json&executionID=3&storyID=8"
    );
    assert_eq!(call.body, None);
}
