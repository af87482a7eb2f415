use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

#[tokio::test]
async fn test_create_testcase_with_steps() {
    let steps = json!([{"desc": "Open the app", "expect": "Home screen"}]);
    let call = request_for(
        "create_testcase",
        json!({"product": 1, "title": "Launch", "type": "feature", "steps": steps, "stage": ["smoke"]}),
    )
    .await;

    assert_eq!(call.path, "/products/1/testcases");
    assert_eq!(
        call.body,
        body(json!({"title": "Launch", "type": "feature", "steps": steps, "stage": ["smoke"]}))
    );
}

/// The test task goes in the query; the step results go in the body.
#[tokio::test]
async fn test_run_testcase_puts_testtask_in_query() {
    let call = request_for(
        "run_testcase",
        json!({"id": 8, "testtask": 3, "steps": [{"result": "pass", "real": ""}]}),
    )
    .await;

    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, "/testcases/8/results?testtask=3");
    assert_eq!(
        call.body,
        body(json!({"steps": [{"result": "pass", "real": ""}]}))
    );
}

#[tokio::test]
async fn test_list_testtask_cases() {
    let call = request_for("list_testtask_cases", json!({"taskID": 3, "pageID": 1})).await;

    assert_eq!(
        call.path,
        "/index.php?m=testtask&f=cases&t=json&taskID=3&pageID=1"
    );
}
