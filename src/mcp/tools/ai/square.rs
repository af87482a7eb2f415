//! The `aiapp` app square seen by end users.

use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

fn app_id() -> Param {
    Param::number("appID", "Mini program ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "browse_ai_app_square",
            "/index.php?m=aiapp&f=square&t=json",
            "Browse published AI apps",
        )
        .param(Param::text("category", "Category key, collections or latest"))
        .params(legacy_pager()),
        ToolSpec::get("get_ai_app", "/index.php?m=aiapp&f=view&t=json", "Get one AI app")
            .param(app_id()),
        ToolSpec::post(
            "collect_ai_app",
            "/index.php?m=aiapp&f=collect&t=json&appID={appID}",
            "Add an AI app to, or remove it from, the caller's collection",
        )
        .params([
            app_id(),
            Param::flag("delete", "Remove from the collection instead of adding")
                .digits()
                .in_query(),
        ]),
        ToolSpec::get(
            "get_ai_app_chat_history",
            "/index.php?m=aiapp&f=chatHistory&t=json",
            "Get the caller's conversation history with an AI app",
        )
        .params([app_id(), Param::number("limit", "Maximum messages to return")]),
    ]);
}
