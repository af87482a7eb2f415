use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, rest_pager};

fn id() -> Param {
    Param::number("id", "Build ID").required()
}

fn fields() -> [Param; 6] {
    [
        Param::number("execution", "Execution ID"),
        Param::number("product", "Product ID"),
        Param::text("builder", "Builder account"),
        Param::text("date", "Build date, YYYY-MM-DD"),
        Param::text("scmPath", "Source repository path"),
        Param::text("filePath", "Download path"),
    ]
}

fn build_id() -> Param {
    Param::number("buildID", "Build ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_project_builds",
            "/projects/{project}/builds",
            "List the builds of a project",
        )
        .param(Param::number("project", "Project ID").required())
        .params(rest_pager()),
        ToolSpec::get(
            "list_execution_builds",
            "/executions/{execution}/builds",
            "List the builds of an execution",
        )
        .param(Param::number("execution", "Execution ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_build", "/builds/{id}", "Get one build by ID").param(id()),
        ToolSpec::post(
            "create_build",
            "/projects/{project}/builds",
            "Create a build in a project",
        )
        .params([
            Param::number("project", "Project ID").required(),
            Param::text("name", "Build name").required(),
        ])
        .params(fields())
        .param(Param::text("desc", "Description (HTML allowed)")),
        ToolSpec::put("update_build", "/builds/{id}", "Update a build")
            .params([id(), Param::text("name", "Build name")])
            .params(fields())
            .param(Param::text("desc", "Description (HTML allowed)")),
        ToolSpec::delete("delete_build", "/builds/{id}", "Delete a build").param(id()),
    ]);

    registry.register([
        ToolSpec::post(
            "link_build_stories",
            "/index.php?m=build&f=linkStory&t=json&buildID={buildID}",
            "Link stories to a build",
        )
        .params([
            build_id(),
            Param::list("stories", ItemKind::Number, "Story IDs").required(),
        ]),
        ToolSpec::post(
            "link_build_bugs",
            "/index.php?m=build&f=linkBug&t=json&buildID={buildID}",
            "Link resolved bugs to a build",
        )
        .params([
            build_id(),
            Param::list("bugs", ItemKind::Number, "Bug IDs").required(),
        ]),
    ]);
}
