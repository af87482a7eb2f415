use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

fn assistant_id() -> Param {
    Param::number("assistantID", "Assistant ID").required()
}

fn persona() -> [Param; 4] {
    [
        Param::number("modelId", "Language model ID"),
        Param::text("desc", "Description"),
        Param::text("systemMessage", "System message sent before every conversation"),
        Param::text("greetings", "Opening message"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_ai_assistants",
            "/index.php?m=ai&f=assistants&t=json",
            "List AI assistants",
        )
        .param(Param::text("orderBy", "Sort order"))
        .params(legacy_pager()),
        ToolSpec::get(
            "get_ai_assistant",
            "/index.php?m=ai&f=assistantView&t=json",
            "Get one assistant",
        )
        .param(assistant_id()),
        ToolSpec::post(
            "create_ai_assistant",
            "/index.php?m=ai&f=assistantCreate&t=json",
            "Create an assistant",
        )
        .param(Param::text("name", "Assistant name").required())
        .params(persona()),
        ToolSpec::post(
            "edit_ai_assistant",
            "/index.php?m=ai&f=assistantEdit&t=json&assistantID={assistantID}",
            "Edit an assistant",
        )
        .params([assistant_id(), Param::text("name", "Assistant name")])
        .params(persona()),
        ToolSpec::post(
            "publish_ai_assistant",
            "/index.php?m=ai&f=assistantPublish&t=json&assistantID={assistantID}",
            "Publish an assistant",
        )
        .param(assistant_id()),
        ToolSpec::post(
            "withdraw_ai_assistant",
            "/index.php?m=ai&f=assistantWithdraw&t=json&assistantID={assistantID}",
            "Withdraw a published assistant",
        )
        .param(assistant_id()),
        ToolSpec::get(
            "delete_ai_assistant",
            "/index.php?m=ai&f=assistantDelete&t=json&assistantID={assistantID}&confirm=yes",
            "Delete an assistant",
        )
        .param(assistant_id()),
    ]);
}
