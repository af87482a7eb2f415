//! Executions (sprints/stages): REST CRUD plus the legacy `execution` module.

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, legacy_pager, rest_pager};

const LIFETIME: &[&str] = &["short", "long", "ops"];
const ACL: &[&str] = &["open", "private"];

fn fields() -> [Param; 10] {
    [
        Param::text("code", "Execution code"),
        Param::text("begin", "Start date, YYYY-MM-DD"),
        Param::text("end", "End date, YYYY-MM-DD"),
        Param::number("days", "Available working days"),
        Param::text("lifetime", "Execution type").one_of(LIFETIME),
        Param::text("PO", "Product owner account"),
        Param::text("PM", "Execution manager account"),
        Param::text("QD", "Test manager account"),
        Param::text("RD", "Release manager account"),
        Param::text("desc", "Description (HTML allowed)"),
    ]
}

fn execution_id() -> Param {
    Param::number("executionID", "Execution ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    register_rest(registry);
    register_views(registry);
    register_lifecycle(registry);
}

fn register_rest(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_project_executions",
            "/projects/{project}/executions",
            "List the executions of a project",
        )
        .param(Param::number("project", "Project ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_execution", "/executions/{id}", "Get one execution by ID")
            .param(Param::number("id", "Execution ID").required()),
        ToolSpec::post(
            "create_execution",
            "/projects/{project}/executions",
            "Create an execution inside a project",
        )
        .params([
            Param::number("project", "Project ID").required(),
            Param::text("name", "Execution name").required(),
        ])
        .params(fields())
        .params([
            Param::list("products", ItemKind::Number, "Linked product IDs"),
            Param::list("teamMembers", ItemKind::Text, "Team member accounts"),
            Param::text("acl", "Access control").one_of(ACL),
        ]),
        ToolSpec::put("update_execution", "/executions/{id}", "Update an execution")
            .params([
                Param::number("id", "Execution ID").required(),
                Param::text("name", "Execution name"),
            ])
            .params(fields())
            .param(Param::text("acl", "Access control").one_of(ACL)),
        ToolSpec::delete("delete_execution", "/executions/{id}", "Delete an execution")
            .param(Param::number("id", "Execution ID").required()),
    ]);
}

fn register_views(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "get_execution_tasks",
            "/index.php?m=execution&f=task&t=json",
            "List the tasks of an execution",
        )
        .params([
            execution_id(),
            Param::text(
                "status",
                "Filter: all, unclosed, assignedtome, myinvolved, delayed, wait, doing, done, closed",
            ),
            Param::text("orderBy", "Sort order, e.g. status,id_desc"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_execution_stories",
            "/index.php?m=execution&f=story&t=json",
            "List the stories linked to an execution",
        )
        .params([
            execution_id(),
            Param::text("storyType", "story or requirement"),
            Param::text("orderBy", "Sort order"),
            Param::text("type", "Browse type, e.g. all, unclosed, bymodule"),
            Param::text("param", "Browse parameter, e.g. a module ID"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_execution_bugs",
            "/index.php?m=execution&f=bug&t=json",
            "List the bugs of an execution",
        )
        .params([
            execution_id(),
            Param::number("productID", "Restrict to one product"),
            Param::text("branch", "Branch ID or all"),
            Param::text("orderBy", "Sort order"),
            Param::text("build", "Build ID"),
            Param::text("type", "Browse type, e.g. all, unresolved"),
            Param::number("param", "Browse parameter"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_execution_builds",
            "/index.php?m=execution&f=build&t=json",
            "List the builds of an execution",
        )
        .params([
            execution_id(),
            Param::text("type", "Browse type, e.g. all, product, bysearch"),
            Param::number("param", "Browse parameter"),
        ]),
        ToolSpec::get(
            "get_execution_team",
            "/index.php?m=execution&f=team&t=json",
            "List the team members of an execution",
        )
        .param(execution_id()),
        ToolSpec::get(
            "get_execution_burn",
            "/index.php?m=execution&f=burn&t=json",
            "Get burndown chart data for an execution",
        )
        .params([
            execution_id(),
            Param::text("type", "noweekend or withweekend"),
            Param::number("interval", "Sampling interval in days"),
        ]),
    ]);
}

fn register_lifecycle(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "start_execution",
            "/index.php?m=execution&f=start&t=json&executionID={executionID}",
            "Start an execution",
        )
        .params([
            execution_id(),
            Param::text("realBegan", "Actual start date, YYYY-MM-DD"),
            comment(),
        ]),
        ToolSpec::post(
            "suspend_execution",
            "/index.php?m=execution&f=suspend&t=json&executionID={executionID}",
            "Suspend an execution",
        )
        .params([execution_id(), comment()]),
        ToolSpec::post(
            "activate_execution",
            "/index.php?m=execution&f=activate&t=json&executionID={executionID}",
            "Reactivate a suspended or closed execution",
        )
        .params([
            execution_id(),
            Param::text("begin", "New start date, YYYY-MM-DD"),
            Param::text("end", "New end date, YYYY-MM-DD"),
            Param::flag("readjustTime", "Readjust the execution dates").digits(),
            Param::flag("readjustTask", "Readjust task dates as well").digits(),
            comment(),
        ]),
        ToolSpec::post(
            "close_execution",
            "/index.php?m=execution&f=close&t=json&executionID={executionID}",
            "Close an execution",
        )
        .params([
            execution_id(),
            Param::text("realEnd", "Actual end date, YYYY-MM-DD"),
            comment(),
        ]),
        ToolSpec::post(
            "putoff_execution",
            "/index.php?m=execution&f=putoff&t=json&executionID={executionID}",
            "Postpone an execution",
        )
        .params([
            execution_id(),
            Param::text("begin", "New start date, YYYY-MM-DD").required(),
            Param::text("end", "New end date, YYYY-MM-DD").required(),
            Param::number("days", "Available working days"),
            comment(),
        ]),
        ToolSpec::post(
            "link_execution_stories",
            "/index.php?m=execution&f=linkStory&t=json&objectID={executionID}",
            "Link stories to an execution",
        )
        .params([
            execution_id(),
            Param::list("stories", ItemKind::Number, "Story IDs to link").required(),
        ]),
        ToolSpec::post(
            "unlink_execution_story",
            "/index.php?m=execution&f=unlinkStory&t=json&executionID={executionID}&storyID={storyID}",
            "Remove one story from an execution",
        )
        .params([
            execution_id(),
            Param::number("storyID", "Story ID").required(),
        ]),
    ]);
}
