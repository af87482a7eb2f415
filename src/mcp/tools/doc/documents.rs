use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec};
use super::ACL;

const OBJECT_TYPE: &[&str] = &["product", "project", "execution", "custom", "mine"];
const CONTENT_TYPE: &[&str] = &["html", "markdown"];
const STATUS: &[&str] = &["normal", "draft"];

fn doc_id() -> Param {
    Param::number("docID", "Document ID").required()
}

fn content() -> [Param; 6] {
    [
        Param::text("content", "Document body"),
        Param::text("contentType", "Body format").one_of(CONTENT_TYPE),
        Param::number("module", "Catalog ID"),
        Param::text("keywords", "Keywords"),
        Param::text("acl", "Access control").one_of(ACL),
        Param::text("status", "Publish state").one_of(STATUS),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("get_doc", "/index.php?m=doc&f=view&t=json", "Get one document")
            .params([doc_id(), Param::number("version", "Version to show")]),
        ToolSpec::post(
            "create_doc",
            "/index.php?m=doc&f=create&t=json&objectType={objectType}&objectID={objectID}&libID={libID}",
            "Create a document in a library",
        )
        .params([
            Param::text("objectType", "Owner kind").one_of(OBJECT_TYPE).required(),
            Param::number("objectID", "Owner ID").required(),
            Param::number("libID", "Library ID").required(),
            Param::text("title", "Document title").required(),
        ])
        .params(content()),
        ToolSpec::post(
            "edit_doc",
            "/index.php?m=doc&f=edit&t=json&docID={docID}",
            "Edit a document",
        )
        .params([doc_id(), Param::text("title", "Document title")])
        .params(content()),
        ToolSpec::get(
            "delete_doc",
            "/index.php?m=doc&f=delete&t=json&docID={docID}&confirm=yes",
            "Delete a document",
        )
        .param(doc_id()),
        ToolSpec::post(
            "collect_doc",
            "/index.php?m=doc&f=collect&t=json&objectID={docID}&objectType=doc",
            "Toggle whether a document is in the caller's favorites",
        )
        .param(doc_id()),
        ToolSpec::post(
            "move_doc",
            "/index.php?m=doc&f=moveDoc&t=json&docID={docID}",
            "Move a document to another library or catalog",
        )
        .params([
            doc_id(),
            Param::number("lib", "Target library ID").required(),
            Param::number("module", "Target catalog ID"),
            Param::text("acl", "Access control").one_of(ACL),
        ]),
    ]);
}
