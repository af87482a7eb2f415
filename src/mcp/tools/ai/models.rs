use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

const VENDOR: &[&str] = &["openai", "azure", "ernie", "openaicompatible"];

fn model_id() -> Param {
    Param::number("modelID", "Language model ID").required()
}

fn connection() -> [Param; 6] {
    [
        Param::text("vendor", "Model provider").one_of(VENDOR),
        Param::text("key", "Provider API key"),
        Param::text("base", "Provider base URL"),
        Param::text("proxyType", "Proxy type, e.g. socks5"),
        Param::text("proxyAddr", "Proxy address"),
        Param::text("description", "Description"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_ai_models",
            "/index.php?m=ai&f=models&t=json",
            "List configured language models",
        )
        .params([Param::text("orderBy", "Sort order")])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_ai_model",
            "/index.php?m=ai&f=modelView&t=json",
            "Get one language model",
        )
        .param(model_id()),
        ToolSpec::post(
            "create_ai_model",
            "/index.php?m=ai&f=modelCreate&t=json",
            "Register a language model",
        )
        .param(Param::text("name", "Display name").required())
        .params(connection()),
        ToolSpec::post(
            "edit_ai_model",
            "/index.php?m=ai&f=modelEdit&t=json&modelID={modelID}",
            "Edit a language model",
        )
        .params([model_id(), Param::text("name", "Display name")])
        .params(connection()),
        ToolSpec::post(
            "enable_ai_model",
            "/index.php?m=ai&f=modelEnable&t=json&modelID={modelID}",
            "Enable a language model",
        )
        .param(model_id()),
        ToolSpec::post(
            "disable_ai_model",
            "/index.php?m=ai&f=modelDisable&t=json&modelID={modelID}",
            "Disable a language model",
        )
        .param(model_id()),
        ToolSpec::get(
            "delete_ai_model",
            "/index.php?m=ai&f=modelDelete&t=json&modelID={modelID}&confirm=yes",
            "Delete a language model",
        )
        .param(model_id()),
    ]);
}
