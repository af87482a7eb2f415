use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, rest_pager};

const BUG_TYPE: &[&str] = &[
    "codeerror",
    "config",
    "install",
    "security",
    "performance",
    "standard",
    "automation",
    "designdefect",
    "others",
];
const RESOLUTION: &[&str] = &[
    "bydesign",
    "duplicate",
    "external",
    "fixed",
    "notrepro",
    "postponed",
    "willnotfix",
    "tostory",
];

fn id() -> Param {
    Param::number("id", "Bug ID").required()
}

fn details() -> [Param; 8] {
    [
        Param::number("module", "Module ID"),
        Param::number("execution", "Execution ID"),
        Param::list("openedBuild", ItemKind::Text, "Builds the bug was found in"),
        Param::text("assignedTo", "Assignee account"),
        Param::text("steps", "Reproduction steps (HTML allowed)"),
        Param::number("story", "Related story ID"),
        Param::number("task", "Related task ID"),
        Param::text("keywords", "Keywords"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_product_bugs",
            "/products/{product}/bugs",
            "List the bugs of a product",
        )
        .params([
            Param::number("product", "Product ID").required(),
            Param::text("status", "Filter by status"),
        ])
        .params(rest_pager()),
        ToolSpec::get("get_bug", "/bugs/{id}", "Get one bug by ID").param(id()),
        ToolSpec::post("create_bug", "/products/{product}/bugs", "Report a bug in a product")
            .params([
                Param::number("product", "Product ID").required(),
                Param::text("title", "Bug title").required(),
                Param::number("severity", "Severity, 1 (highest) to 4").required(),
                Param::number("pri", "Priority, 1 (highest) to 4").required(),
                Param::text("type", "Bug type").one_of(BUG_TYPE).required(),
            ])
            .params(details()),
        ToolSpec::put("update_bug", "/bugs/{id}", "Update bug fields")
            .params([
                id(),
                Param::text("title", "Bug title"),
                Param::number("severity", "Severity, 1 (highest) to 4"),
                Param::number("pri", "Priority, 1 (highest) to 4"),
                Param::text("type", "Bug type").one_of(BUG_TYPE),
            ])
            .params(details()),
        ToolSpec::delete("delete_bug", "/bugs/{id}", "Delete a bug").param(id()),
        ToolSpec::post("confirm_bug", "/bugs/{id}/confirm", "Confirm a bug").params([
            id(),
            Param::text("assignedTo", "Assignee account"),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::text("deadline", "Deadline, YYYY-MM-DD"),
            comment(),
        ]),
        ToolSpec::post("resolve_bug", "/bugs/{id}/resolve", "Resolve a bug").params([
            id(),
            Param::text("resolution", "How the bug was resolved")
                .one_of(RESOLUTION)
                .required(),
            Param::text("resolvedBuild", "Build that contains the fix"),
            Param::text("resolvedDate", "Resolution time"),
            Param::number("duplicateBug", "Duplicate bug ID when resolution is duplicate"),
            Param::text("assignedTo", "Hand the resolved bug to this account"),
            comment(),
        ]),
        ToolSpec::post("close_bug", "/bugs/{id}/close", "Close a resolved bug")
            .params([id(), comment()]),
        ToolSpec::post("activate_bug", "/bugs/{id}/active", "Reactivate a bug").params([
            id(),
            Param::text("assignedTo", "Assignee account"),
            Param::list("openedBuild", ItemKind::Text, "Builds the bug reappeared in"),
            comment(),
        ]),
        ToolSpec::post("assign_bug", "/bugs/{id}/assign", "Assign a bug").params([
            id(),
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
    ]);
}
