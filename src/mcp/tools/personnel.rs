use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, legacy_pager};

const OBJECT_TYPE: &[&str] = &["program", "project", "product", "sprint"];

fn program_id() -> Param {
    Param::number("programID", "Program ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_accessible_personnel",
            "/index.php?m=personnel&f=accessible&t=json",
            "List users who can access a program",
        )
        .params([
            program_id(),
            Param::number("deptID", "Restrict to one department"),
            Param::text("browseType", "all or bysearch"),
            Param::number("param", "Browse parameter"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "list_invested_personnel",
            "/index.php?m=personnel&f=invest&t=json",
            "List users invested in a program, with their workload",
        )
        .param(program_id()),
        ToolSpec::get(
            "list_whitelist",
            "/index.php?m=personnel&f=whitelist&t=json",
            "List the whitelist of a private object",
        )
        .params([
            Param::number("objectID", "Object ID").required(),
            Param::text("module", "Module owning the object")
                .one_of(&["program", "project", "product", "execution"]),
            Param::text("objectType", "Object kind").one_of(OBJECT_TYPE),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "add_whitelist",
            "/index.php?m=personnel&f=addWhitelist&t=json&objectID={objectID}&objectType={objectType}",
            "Add users to the whitelist of a private object",
        )
        .params([
            Param::number("objectID", "Object ID").required(),
            Param::text("objectType", "Object kind").one_of(OBJECT_TYPE).required(),
            Param::list("accounts", ItemKind::Text, "Accounts to add").required(),
        ]),
        ToolSpec::get(
            "remove_whitelist",
            "/index.php?m=personnel&f=unbindWhitelist&t=json&id={id}&confirm=yes",
            "Remove one whitelist entry",
        )
        .param(Param::number("id", "Whitelist entry ID").required()),
    ]);
}
