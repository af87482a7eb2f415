use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_doc_files",
            "/index.php?m=doc&f=showFiles&t=json",
            "List the attachments in a product, project or execution document space",
        )
        .params([
            Param::text("type", "Owner kind")
                .one_of(&["product", "project", "execution"])
                .required(),
            Param::number("objectID", "Owner ID").required(),
            Param::text("viewType", "list or card"),
            Param::text("orderBy", "Sort order"),
            Param::text("searchTitle", "Filter by file name"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "delete_doc_file",
            "/index.php?m=doc&f=deleteFile&t=json&docID={docID}&fileID={fileID}&confirm=yes",
            "Delete an attachment from a document",
        )
        .params([
            Param::number("docID", "Document ID").required(),
            Param::number("fileID", "File ID").required(),
        ]),
    ]);
}
