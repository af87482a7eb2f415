//! Module trees (legacy `tree` module) for products, docs, cases and more.

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec};

const VIEW_TYPE: &[&str] = &[
    "story", "bug", "case", "doc", "feedback", "ticket", "task", "host", "line", "api",
];

pub(super) fn register(registry: &mut ToolRegistry) {
    register_browse(registry);
    register_manage(registry);
}

fn register_browse(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "browse_modules",
            "/index.php?m=tree&f=browse&t=json",
            "Get the module tree under a root object",
        )
        .params([
            Param::number("rootID", "Product, library or other root ID").required(),
            Param::text("view", "Tree kind").one_of(VIEW_TYPE).required(),
            Param::number("currentModuleID", "Module to expand"),
            Param::text("branch", "Branch ID or all"),
        ]),
        ToolSpec::get(
            "get_module_option_menu",
            "/index.php?m=tree&f=ajaxGetOptionMenu&t=json",
            "Get modules as a flat id-to-path menu",
        )
        .params([
            Param::number("rootID", "Root object ID").required(),
            Param::text("viewType", "Tree kind").one_of(VIEW_TYPE),
            Param::text("branch", "Branch ID or all"),
            Param::number("rootModuleID", "Only include modules under this one"),
        ]),
    ]);
}

fn register_manage(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_child_modules",
            "/index.php?m=tree&f=manageChild&t=json&root={root}&viewType={viewType}",
            "Create child modules under a parent",
        )
        .params([
            Param::number("root", "Root object ID").required(),
            Param::text("viewType", "Tree kind").one_of(VIEW_TYPE).required(),
            Param::number("parentModuleID", "Parent module; 0 for top level"),
            Param::list("modules", ItemKind::Text, "Names of the new modules").required(),
            Param::list("shorts", ItemKind::Text, "Short names, aligned with modules"),
        ]),
        ToolSpec::post(
            "edit_module",
            "/index.php?m=tree&f=edit&t=json&moduleID={moduleID}&type={type}",
            "Edit a module",
        )
        .params([
            Param::number("moduleID", "Module ID").required(),
            Param::text("type", "Tree kind").one_of(VIEW_TYPE).required(),
            Param::text("name", "Module name"),
            Param::text("short", "Short name"),
            Param::number("parent", "New parent module ID"),
            Param::text("owner", "Owner account"),
        ]),
        ToolSpec::get(
            "delete_module",
            "/index.php?m=tree&f=delete&t=json&rootID={rootID}&moduleID={moduleID}&confirm=yes",
            "Delete a module and its children",
        )
        .params([
            Param::number("rootID", "Root object ID").required(),
            Param::number("moduleID", "Module ID").required(),
        ]),
        ToolSpec::post(
            "sort_modules",
            "/index.php?m=tree&f=updateOrder&t=json",
            "Reorder modules",
        )
        .param(Param::object("orders", "Map of module ID to sort position").required()),
        ToolSpec::post(
            "fix_module_paths",
            "/index.php?m=tree&f=fix&t=json&root={root}&type={type}",
            "Rebuild the stored paths and grades of a module tree",
        )
        .params([
            Param::number("root", "Root object ID").required(),
            Param::text("type", "Tree kind").one_of(VIEW_TYPE).required(),
        ]),
    ]);
}
