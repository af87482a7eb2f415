use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

fn app_id() -> Param {
    Param::number("appID", "Mini program ID").required()
}

fn details() -> [Param; 4] {
    [
        Param::text("category", "Category key"),
        Param::text("desc", "Description"),
        Param::number("model", "Language model ID"),
        Param::text("icon", "Icon name"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_ai_miniprograms",
            "/index.php?m=ai&f=miniPrograms&t=json",
            "List AI mini programs",
        )
        .params([
            Param::text("category", "Filter by category"),
            Param::text("status", "Filter by status"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_ai_miniprogram",
            "/index.php?m=ai&f=miniProgramView&t=json",
            "Get one mini program",
        )
        .param(app_id()),
        ToolSpec::post(
            "create_ai_miniprogram",
            "/index.php?m=ai&f=createMiniProgram&t=json",
            "Create a mini program",
        )
        .param(Param::text("name", "Mini program name").required())
        .params(details()),
        ToolSpec::post(
            "edit_ai_miniprogram",
            "/index.php?m=ai&f=editMiniProgram&t=json&appID={appID}",
            "Edit a mini program",
        )
        .params([app_id(), Param::text("name", "Mini program name")])
        .params(details()),
        ToolSpec::post(
            "publish_ai_miniprogram",
            "/index.php?m=ai&f=publishMiniProgram&t=json&appID={appID}",
            "Publish a mini program to the app square",
        )
        .param(app_id()),
        ToolSpec::post(
            "unpublish_ai_miniprogram",
            "/index.php?m=ai&f=unpublishMiniProgram&t=json&appID={appID}",
            "Take a mini program off the app square",
        )
        .param(app_id()),
        ToolSpec::get(
            "delete_ai_miniprogram",
            "/index.php?m=ai&f=deleteMiniProgram&t=json&appID={appID}&confirm=yes",
            "Delete a mini program",
        )
        .param(app_id()),
        ToolSpec::get(
            "export_ai_miniprogram",
            "/index.php?m=ai&f=exportMiniProgram&t=json",
            "Export a mini program definition",
        )
        .param(app_id()),
    ]);
}
