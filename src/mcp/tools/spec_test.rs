use super::spec::*;
use serde_json::json;

fn bug_spec() -> ToolSpec {
    ToolSpec::post("create_bug", "/products/{product}/bugs", "Report a bug").params([
        Param::number("product", "Product ID"),
        Param::text("title", "Title").required(),
        Param::text("type", "Type").one_of(&["codeerror", "config"]),
        Param::list("openedBuild", ItemKind::Text, "Builds"),
        Param::number("testtask", "Test task").in_query(),
    ])
}

/// Placement follows the method and whether the name is a placeholder.
#[test]
fn test_placement_rules() {
    let spec = bug_spec();
    let Target::Http { method, path } = spec.target else {
        panic!("expected an HTTP target");
    };

    let placements: Vec<_> = spec
        .params
        .iter()
        .map(|p| p.placement(method, path))
        .collect();
    assert_eq!(
        placements,
        vec![
            Placement::Path,
            Placement::Body,
            Placement::Body,
            Placement::Body,
            Placement::Query,
        ]
    );

    let get = Param::text("status", "Status");
    assert_eq!(get.placement(Method::Get, "/bugs"), Placement::Query);
    assert_eq!(get.placement(Method::Delete, "/bugs"), Placement::Query);
}

#[test]
fn test_input_schema() {
    let schema = bug_spec().input_schema();

    assert_eq!(schema["type"], json!("object"));
    // placeholders are required even when declared optional
    assert_eq!(schema["required"], json!(["product", "title"]));
    assert_eq!(schema["properties"]["product"]["type"], json!("number"));
    assert_eq!(
        schema["properties"]["type"]["enum"],
        json!(["codeerror", "config"])
    );
    assert_eq!(
        schema["properties"]["openedBuild"],
        json!({"type": "array", "description": "Builds", "items": {"type": "string"}})
    );
}

/// An input schema with nothing required has no `required` key.
#[test]
fn test_schema_without_required_fields_omits_the_key() {
    let schema = ToolSpec::get("list_users", "/users", "List users")
        .param(Param::number("page", "Page"))
        .input_schema();

    assert!(!schema.contains_key("required"));
}

/// Error prefixes are derived from the tool name.
#[test]
fn test_action_phrase() {
    assert_eq!(bug_spec().action(), "create bug");
    assert_eq!(
        ToolSpec::get("get_ai_app_chat_history", "/x", "").action(),
        "get ai app chat history"
    );
}

#[test]
fn test_to_tool_carries_name_and_description() {
    let tool = bug_spec().to_tool();

    assert_eq!(tool.name, "create_bug");
    assert_eq!(tool.description.as_deref(), Some("Report a bug"));
    assert_eq!(tool.input_schema["required"], json!(["product", "title"]));
}

#[test]
fn test_method_display_and_body() {
    assert_eq!(Method::Put.to_string(), "PUT");
    assert!(Method::Post.carries_body());
    assert!(!Method::Delete.carries_body());
}
