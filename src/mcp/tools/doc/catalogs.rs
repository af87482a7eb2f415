use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec};

fn module_id() -> Param {
    Param::number("moduleID", "Catalog ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_doc_catalog",
            "/index.php?m=doc&f=addCatalog&t=json&libID={libID}",
            "Add a catalog to a library",
        )
        .params([
            Param::number("libID", "Library ID").required(),
            Param::text("name", "Catalog name").required(),
            Param::number("parentID", "Parent catalog ID"),
        ]),
        ToolSpec::post(
            "edit_doc_catalog",
            "/index.php?m=doc&f=editCatalog&t=json&moduleID={moduleID}",
            "Rename a catalog",
        )
        .params([module_id(), Param::text("name", "Catalog name").required()]),
        ToolSpec::get(
            "delete_doc_catalog",
            "/index.php?m=doc&f=deleteCatalog&t=json&moduleID={moduleID}&confirm=yes",
            "Delete a catalog",
        )
        .param(module_id()),
    ]);
}
