//! Global search (legacy `search` module).

use super::ToolRegistry;
use super::spec::{Param, ToolSpec, legacy_pager};

pub(super) fn register(registry: &mut ToolRegistry) {
    register_index(registry);
    register_queries(registry);
}

fn register_index(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "search",
            "/index.php?m=search&f=index&t=json",
            "Full-text search across ZenTao objects",
        )
        .params([
            Param::text("words", "Search terms").required(),
            Param::text("type", "Object types to search, comma separated, or all"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "build_search_index",
            "/index.php?m=search&f=buildIndex&t=json",
            "Rebuild the full-text index, one batch per call",
        )
        .params([
            Param::text("type", "Object type to continue from"),
            Param::number("lastID", "Last indexed ID of that type"),
        ]),
    ]);
}

fn register_queries(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "save_search_query",
            "/index.php?m=search&f=saveQuery&t=json&module={module}",
            "Save the current search form as a named query",
        )
        .params([
            Param::text("module", "Module the search form belongs to, e.g. story or bug")
                .required(),
            Param::text("title", "Query name").required(),
            Param::flag("common", "Share with all users").digits(),
            Param::flag("onMenuBar", "Show on the menu bar").digits(),
        ]),
        ToolSpec::get(
            "delete_search_query",
            "/index.php?m=search&f=deleteQuery&t=json&queryID={queryID}&confirm=yes",
            "Delete a saved query",
        )
        .param(Param::number("queryID", "Saved query ID").required()),
    ]);
}
