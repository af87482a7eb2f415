use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

/// `public` and `notify` are posted as `"1"`/`"0"`.
#[tokio::test]
async fn test_create_feedback_digit_flags() {
    let call = request_for(
        "create_feedback",
        json!({"product": 1, "title": "Dark mode", "public": true, "notify": false}),
    )
    .await;

    assert_eq!(call.path, "/feedbacks");
    assert_eq!(
        call.body,
        body(json!({"product": 1, "title": "Dark mode", "public": "1", "notify": "0"}))
    );
}

/// Feedback assignment and closing are PUTs in the REST API.
#[tokio::test]
async fn test_assign_and_close_use_put() {
    let assign = request_for("assign_feedback", json!({"id": 3, "assignedTo": "erin"})).await;
    assert_eq!(assign.method, Method::Put);
    assert_eq!(assign.path, "/feedbacks/3/assign");

    let close = request_for("close_feedback", json!({"id": 3})).await;
    assert_eq!(close.method, Method::Put);
    assert_eq!(close.path, "/feedbacks/3/close");
    assert_eq!(close.body, None);
}
