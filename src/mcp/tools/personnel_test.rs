use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

#[tokio::test]
async fn test_add_whitelist() {
    let call = request_for(
        "add_whitelist",
        json!({"objectID": 2, "objectType": "project", "accounts": ["alice", "bob"]}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=personnel&f=addWhitelist&t=json&objectID=2&objectType=project"
    );
    assert_eq!(call.body, body(json!({"accounts": ["alice", "bob"]})));
}

/// Removing from a whitelist is a legacy delete and needs `confirm=yes`.
#[tokio::test]
async fn test_remove_whitelist_confirms() {
    let call = request_for("remove_whitelist", json!({"id": 17})).await;

    assert_eq!(call.method, Method::Get);
    assert_eq!(
        call.path,
        "/index.php?m=personnel&f=unbindWhitelist&t=json&id=17&confirm=yes"
    );
}
