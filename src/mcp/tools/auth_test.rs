use super::CREDENTIALS_UPDATED;
use super::testing::{RecordingBackend, invoke, text};
use crate::client::Credentials;
use rmcp::model::ErrorCode;
use serde_json::json;

/// Login only swaps credentials and never talks to ZenTao.
#[tokio::test]
async fn test_login_sets_credentials_without_a_request() {
    let backend = RecordingBackend::default();

    let result = invoke(&backend, "zentao_login", json!({"code": "app1", "key": "secret"}))
        .await
        .unwrap();

    assert_eq!(text(&result), CREDENTIALS_UPDATED);
    assert!(backend.calls().is_empty());
    assert_eq!(backend.credentials(), Some(Credentials::new("app1", "secret")));
}

#[tokio::test]
async fn test_login_replaces_previous_credentials() {
    let backend = RecordingBackend::default();

    invoke(&backend, "zentao_login", json!({"code": "app1", "key": "secret"}))
        .await
        .unwrap();
    invoke(&backend, "zentao_login", json!({"code": "app2", "key": "other"}))
        .await
        .unwrap();

    assert_eq!(backend.credentials(), Some(Credentials::new("app2", "other")));
}

/// Code and key are both required.
#[tokio::test]
async fn test_login_requires_both_halves() {
    let backend = RecordingBackend::default();

    let err = invoke(&backend, "zentao_login", json!({"code": "app1"}))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data, Some(json!({"parameter": "key"})));
    assert_eq!(backend.credentials(), None);
}
