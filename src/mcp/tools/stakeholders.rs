use super::ToolRegistry;
use super::spec::{Param, ToolSpec, legacy_pager};

const FROM: &[&str] = &["team", "company", "outside"];

fn analysis() -> [Param; 4] {
    [
        Param::flag("key", "Key stakeholder").digits(),
        Param::text("nature", "Character and attitude"),
        Param::text("analysis", "Impact analysis"),
        Param::text("strategy", "Response strategy"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_stakeholders",
            "/index.php?m=stakeholder&f=browse&t=json",
            "List the stakeholders of a project",
        )
        .params([
            Param::number("projectID", "Project ID").required(),
            Param::text("browseType", "all, inside or outside"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_stakeholder",
            "/index.php?m=stakeholder&f=view&t=json",
            "Get one stakeholder",
        )
        .param(Param::number("userID", "Stakeholder ID").required()),
        ToolSpec::post(
            "create_stakeholder",
            "/index.php?m=stakeholder&f=create&t=json&objectID={objectID}",
            "Add a stakeholder to a project",
        )
        .params([
            Param::number("objectID", "Project ID").required(),
            Param::text("from", "Where the stakeholder comes from").one_of(FROM).required(),
            Param::text("user", "Account of an existing user"),
            Param::text("name", "Name, for stakeholders without an account"),
            Param::text("phone", "Phone"),
            Param::text("email", "Email"),
            Param::text("company", "Company"),
        ])
        .params(analysis()),
        ToolSpec::post(
            "edit_stakeholder",
            "/index.php?m=stakeholder&f=edit&t=json&stakeholderID={stakeholderID}",
            "Edit a stakeholder",
        )
        .params([
            Param::number("stakeholderID", "Stakeholder ID").required(),
            Param::text("phone", "Phone"),
            Param::text("email", "Email"),
        ])
        .params(analysis()),
        ToolSpec::get(
            "delete_stakeholder",
            "/index.php?m=stakeholder&f=delete&t=json&userID={userID}&confirm=yes",
            "Remove a stakeholder",
        )
        .param(Param::number("userID", "Stakeholder ID").required()),
        ToolSpec::get(
            "list_stakeholder_issues",
            "/index.php?m=stakeholder&f=issue&t=json",
            "List issues raised by a stakeholder",
        )
        .param(Param::number("stakeholderID", "Stakeholder ID").required()),
        ToolSpec::get(
            "list_stakeholder_expectations",
            "/index.php?m=stakeholder&f=expectation&t=json",
            "List recorded stakeholder expectations",
        )
        .params([
            Param::text("browseType", "all or bysearch"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "create_stakeholder_expectation",
            "/index.php?m=stakeholder&f=createExpect&t=json&userID={userID}",
            "Record an expectation for a stakeholder",
        )
        .params([
            Param::number("userID", "Stakeholder ID").required(),
            Param::text("expect", "What the stakeholder expects").required(),
            Param::text("progress", "How it is being addressed"),
        ]),
    ]);
}
