//! Design documents, legacy `design` module.

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, legacy_pager};

const DESIGN_TYPE: &[&str] = &["HLDS", "DDS", "DBDS", "ADS"];

fn design_id() -> Param {
    Param::number("designID", "Design ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_designs",
            "/index.php?m=design&f=browse&t=json",
            "List the designs of a project",
        )
        .params([
            Param::number("projectID", "Project ID").required(),
            Param::number("productID", "Restrict to one product"),
            Param::text("type", "Browse type: all, bySearch, or a design type"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_design",
            "/index.php?m=design&f=view&t=json",
            "Get one design by ID",
        )
        .param(design_id()),
        ToolSpec::post(
            "create_design",
            "/index.php?m=design&f=create&t=json&projectID={projectID}",
            "Create a design",
        )
        .params([
            Param::number("projectID", "Project ID").required(),
            Param::text("name", "Design name").required(),
            Param::text("type", "Design type").one_of(DESIGN_TYPE).required(),
            Param::number("product", "Product ID"),
            Param::number("story", "Related story ID"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::post(
            "update_design",
            "/index.php?m=design&f=edit&t=json&designID={designID}",
            "Edit a design",
        )
        .params([
            design_id(),
            Param::text("name", "Design name"),
            Param::text("type", "Design type").one_of(DESIGN_TYPE),
            Param::number("product", "Product ID"),
            Param::number("story", "Related story ID"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::get(
            "delete_design",
            "/index.php?m=design&f=delete&t=json&designID={designID}&confirm=yes",
            "Delete a design",
        )
        .param(design_id()),
        ToolSpec::post(
            "assign_design",
            "/index.php?m=design&f=assignTo&t=json&designID={designID}",
            "Assign a design",
        )
        .params([
            design_id(),
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
        ToolSpec::post(
            "link_design_commits",
            "/index.php?m=design&f=linkCommit&t=json&designID={designID}&repoID={repoID}",
            "Link repository commits to a design",
        )
        .params([
            design_id(),
            Param::number("repoID", "Repository ID").required(),
            Param::list("revision", ItemKind::Text, "Commit revisions").required(),
        ]),
        ToolSpec::post(
            "unlink_design_commit",
            "/index.php?m=design&f=unlinkCommit&t=json&designID={designID}&commitID={commitID}",
            "Unlink one commit from a design",
        )
        .params([
            design_id(),
            Param::number("commitID", "Commit ID").required(),
        ]),
    ]);
}
