use super::args::*;
use super::spec::{ItemKind, Method, Param};
use serde_json::{Map, Value, json};

fn args(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn task_query() -> Vec<Param> {
    vec![
        Param::number("executionID", "Execution").required(),
        Param::text("status", "Status"),
        Param::number("pageID", "Page"),
    ]
}

/// Legacy templates already carry `?m=..`, so extra pairs join with `&`.
#[test]
fn test_query_appends_with_ampersand_after_legacy_prefix() {
    let request = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=execution&f=task&t=json",
        &task_query(),
        &args(json!({"executionID": 7, "pageID": 2})),
    )
    .unwrap();

    assert_eq!(
        request.path,
        "/index.php?m=execution&f=task&t=json&executionID=7&pageID=2"
    );
    assert_eq!(request.body, None);
}

/// REST templates have no query, so the first pair opens one with `?`.
#[test]
fn test_query_starts_with_question_mark_on_rest_path() {
    let params = [Param::number("page", "Page"), Param::number("limit", "Limit")];
    let request = RequestEnvelope::build(
        Method::Get,
        "/products",
        &params,
        &args(json!({"limit": 20, "page": 1})),
    )
    .unwrap();

    // declaration order, not argument order
    assert_eq!(request.path, "/products?page=1&limit=20");
}

/// No pairs means no dangling `?` or `&`.
#[test]
fn test_no_optional_arguments_means_no_delimiter() {
    let params = [Param::number("page", "Page")];
    let request =
        RequestEnvelope::build(Method::Get, "/products", &params, &Map::new()).unwrap();

    assert_eq!(request.path, "/products");
}

/// Required parameters and path placeholders both fail when absent.
#[test]
fn test_missing_required_and_placeholder() {
    let err = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=execution&f=task&t=json",
        &task_query(),
        &Map::new(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::Missing {
            name: "executionID".into()
        }
    );

    // a placeholder without a value is missing even if declared optional
    let params = [Param::number("id", "ID")];
    let err = RequestEnvelope::build(Method::Delete, "/stories/{id}", &params, &Map::new())
        .unwrap_err();
    assert_eq!(err.parameter(), "id");
}

/// Explicit `null` behaves like an omitted argument.
#[test]
fn test_null_counts_as_absent() {
    let request = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=execution&f=task&t=json",
        &task_query(),
        &args(json!({"executionID": 7, "status": null})),
    )
    .unwrap();
    assert!(!request.path.contains("status"));

    let err = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=execution&f=task&t=json",
        &task_query(),
        &args(json!({"executionID": null})),
    )
    .unwrap_err();
    assert!(matches!(err, ArgumentError::Missing { .. }));
}

#[test]
fn test_wrong_types_are_rejected() {
    let err = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=execution&f=task&t=json",
        &task_query(),
        &args(json!({"executionID": "seven"})),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::WrongType {
            name: "executionID".into(),
            expected: "a number"
        }
    );

    let params = [Param::list("stories", ItemKind::Number, "Stories")];
    let err = RequestEnvelope::build(
        Method::Post,
        "/x",
        &params,
        &args(json!({"stories": [1, "two"]})),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "parameter 'stories' must be an array of numbers");
}

#[test]
fn test_enum_values_are_checked() {
    let params = [
        Param::text("type", "Type").one_of(&["codeerror", "config"]),
        Param::list("stage", ItemKind::Text, "Stages").one_of(&["unittest", "feature"]),
    ];

    let err = RequestEnvelope::build(
        Method::Post,
        "/x",
        &params,
        &args(json!({"type": "CodeError"})),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ArgumentError::NotAllowed {
            name: "type".into(),
            allowed: "codeerror, config".into()
        }
    );

    let err = RequestEnvelope::build(
        Method::Post,
        "/x",
        &params,
        &args(json!({"stage": ["feature", "smoke"]})),
    )
    .unwrap_err();
    assert_eq!(err.parameter(), "stage");
}

/// Fractional numbers are truncated toward zero wherever they land.
#[test]
fn test_numbers_truncate_in_path_and_body() {
    let params = [
        Param::number("id", "ID"),
        Param::number("left", "Hours left"),
    ];
    let request = RequestEnvelope::build(
        Method::Post,
        "/tasks/{id}/start",
        &params,
        &args(json!({"id": 42.9, "left": 3.5})),
    )
    .unwrap();

    assert_eq!(request.path, "/tasks/42/start");
    assert_eq!(request.body, Some(args(json!({"left": 3}))));
}

/// Some ZenTao forms want booleans as `"1"`/`"0"` strings.
#[test]
fn test_digit_flags() {
    let params = [
        Param::number("executionID", "ID"),
        Param::flag("readjustTime", "Readjust").digits(),
        Param::flag("delete", "Remove").digits().in_query(),
        Param::flag("plain", "Plain flag"),
    ];
    let request = RequestEnvelope::build(
        Method::Post,
        "/index.php?m=execution&f=activate&t=json&executionID={executionID}",
        &params,
        &args(json!({"executionID": 3, "readjustTime": true, "delete": false, "plain": true})),
    )
    .unwrap();

    assert_eq!(
        request.path,
        "/index.php?m=execution&f=activate&t=json&executionID=3&delete=0"
    );
    assert_eq!(
        request.body,
        Some(args(json!({"readjustTime": "1", "plain": true})))
    );
}

/// A POST with no body fields sends no body at all, not `{}`.
#[test]
fn test_post_without_payload_has_no_body() {
    let params = [Param::number("id", "ID"), Param::text("comment", "Comment")];
    let request = RequestEnvelope::build(
        Method::Post,
        "/tasks/{id}/pause",
        &params,
        &args(json!({"id": 5})),
    )
    .unwrap();

    assert_eq!(request.body, None);
}

/// Query values are form-encoded; lists are comma-joined before encoding.
#[test]
fn test_values_are_url_encoded() {
    let params = [
        Param::text("module", "Module"),
        Param::text("words", "Words"),
        Param::list("ids", ItemKind::Number, "IDs"),
    ];
    let request = RequestEnvelope::build(
        Method::Get,
        "/index.php?m=search&f=index&t=json&module={module}",
        &params,
        &args(json!({"module": "a/b", "words": "crash & burn", "ids": [1, 2]})),
    )
    .unwrap();

    assert_eq!(
        request.path,
        "/index.php?m=search&f=index&t=json&module=a%2Fb&words=crash+%26+burn&ids=1%2C2"
    );
}

/// Placeholders in a REST path are path segments, not form values.
#[test]
fn test_rest_placeholders_are_segment_encoded() {
    let params = [Param::text("name", "Name")];
    let request = RequestEnvelope::build(
        Method::Get,
        "/branches/{name}",
        &params,
        &args(json!({"name": "release 1.0+hotfix/2"})),
    )
    .unwrap();

    assert_eq!(request.path, "/branches/release%201.0+hotfix%2F2");
}

/// Numbers beyond i64 must fail instead of saturating to i64::MAX.
#[test]
fn test_ids_outside_i64_are_rejected() {
    let params = [Param::number("id", "ID").required()];

    for value in [json!(18446744073709551615u64), json!(1e20), json!(-1e20)] {
        let err = RequestEnvelope::build(
            Method::Delete,
            "/stories/{id}",
            &params,
            &args(json!({ "id": value })),
        )
        .unwrap_err();
        assert_eq!(err, ArgumentError::OutOfRange { name: "id".into() }, "{value}");
    }

    let request = RequestEnvelope::build(
        Method::Delete,
        "/stories/{id}",
        &params,
        &args(json!({"id": 9223372036854775807u64})),
    )
    .unwrap();
    assert_eq!(request.path, "/stories/9223372036854775807");
}

#[test]
fn test_required_text() {
    let map = args(json!({"code": "app1", "key": 5}));

    assert_eq!(required_text(&map, "code").unwrap(), "app1");
    assert_eq!(
        required_text(&map, "key").unwrap_err(),
        ArgumentError::WrongType {
            name: "key".into(),
            expected: "a string"
        }
    );
    assert!(matches!(
        required_text(&map, "missing"),
        Err(ArgumentError::Missing { .. })
    ));
}
