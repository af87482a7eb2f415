use super::super::ToolRegistry;
use super::super::spec::{ItemKind, Param, ToolSpec};
use super::ACL;

const LIB_TYPE: &[&str] = &["product", "project", "execution", "custom", "mine"];

fn lib_id() -> Param {
    Param::number("libID", "Library ID").required()
}

fn access() -> [Param; 3] {
    [
        Param::text("acl", "Access control").one_of(ACL),
        Param::list("users", ItemKind::Text, "Accounts allowed when private"),
        Param::list("groups", ItemKind::Number, "Groups allowed when private"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_doc_lib",
            "/index.php?m=doc&f=createLib&t=json&type={type}&objectID={objectID}",
            "Create a document library",
        )
        .params([
            Param::text("type", "Owner kind").one_of(LIB_TYPE).required(),
            Param::number("objectID", "Owner ID; 0 for custom and personal libraries").required(),
            Param::text("name", "Library name").required(),
        ])
        .params(access()),
        ToolSpec::post(
            "edit_doc_lib",
            "/index.php?m=doc&f=editLib&t=json&libID={libID}",
            "Edit a document library",
        )
        .params([lib_id(), Param::text("name", "Library name")])
        .params(access()),
        ToolSpec::get(
            "delete_doc_lib",
            "/index.php?m=doc&f=deleteLib&t=json&libID={libID}&confirm=yes",
            "Delete a document library",
        )
        .param(lib_id()),
    ]);
}
