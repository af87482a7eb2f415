use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

/// Un-collecting is the same endpoint with `delete=1` in the query.
#[tokio::test]
async fn test_collect_ai_app_delete_flag_in_query() {
    let add = request_for("collect_ai_app", json!({"appID": 3})).await;
    assert_eq!(add.method, Method::Post);
    assert_eq!(add.path, "/index.php?m=aiapp&f=collect&t=json&appID=3");
    assert_eq!(add.body, None);

    let remove = request_for("collect_ai_app", json!({"appID": 3, "delete": true})).await;
    assert_eq!(
        remove.path,
        "/index.php?m=aiapp&f=collect&t=json&appID=3&delete=1"
    );
}

/// ZenTao spells these query keys `promptId` and `objectId`.
#[tokio::test]
async fn test_execute_ai_prompt() {
    let call = request_for("execute_ai_prompt", json!({"promptID": 2, "objectID": 40})).await;

    assert_eq!(
        call.path,
        "/index.php?m=ai&f=promptExecute&t=json&promptId=2&objectId=40"
    );
}

#[tokio::test]
async fn test_create_ai_model() {
    let call = request_for(
        "create_ai_model",
        json!({"name": "gpt", "vendor": "openai", "key": "sk-test"}),
    )
    .await;

    assert_eq!(call.path, "/index.php?m=ai&f=modelCreate&t=json");
    assert_eq!(
        call.body,
        body(json!({"name": "gpt", "vendor": "openai", "key": "sk-test"}))
    );
}

#[tokio::test]
async fn test_browse_ai_app_square() {
    let call = request_for("browse_ai_app_square", json!({"category": "latest"})).await;

    assert_eq!(
        call.path,
        "/index.php?m=aiapp&f=square&t=json&category=latest"
    );
}
