use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

/// The product space takes the product and, optionally, a library.
#[tokio::test]
async fn test_get_product_doc_space() {
    let call = request_for("get_product_doc_space", json!({"objectID": 1, "libID": 4})).await;

    assert_eq!(call.method, Method::Get);
    assert_eq!(
        call.path,
        "/index.php?m=doc&f=productSpace&t=json&objectID=1&libID=4"
    );
}

#[tokio::test]
async fn test_create_doc() {
    let call = request_for(
        "create_doc",
        json!({
            "objectType": "project", "objectID": 2, "libID": 5,
            "title": "Runbook", "content": "# Steps", "contentType": "markdown"
        }),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=doc&f=create&t=json&objectType=project&objectID=2&libID=5"
    );
    assert_eq!(
        call.body,
        body(json!({"title": "Runbook", "content": "# Steps", "contentType": "markdown"}))
    );
}

#[tokio::test]
async fn test_collect_doc() {
    let call = request_for("collect_doc", json!({"docID": 12})).await;

    assert_eq!(
        call.path,
        "/index.php?m=doc&f=collect&t=json&objectID=12&objectType=doc"
    );
    assert_eq!(call.body, None);
}

#[tokio::test]
async fn test_delete_doc_file() {
    let call = request_for("delete_doc_file", json!({"docID": 12, "fileID": 30})).await;

    assert_eq!(
        call.path,
        "/index.php?m=doc&f=deleteFile&t=json&docID=12&fileID=30&confirm=yes"
    );
}
