use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, rest_pager};

const TASK_TYPE: &[&str] = &[
    "design", "devel", "request", "test", "study", "discuss", "ui", "affair", "misc",
];

fn id() -> Param {
    Param::number("id", "Task ID").required()
}

fn schedule() -> [Param; 4] {
    [
        Param::number("estimate", "Estimate in hours"),
        Param::text("estStarted", "Planned start date, YYYY-MM-DD"),
        Param::text("deadline", "Deadline, YYYY-MM-DD"),
        Param::text("desc", "Description (HTML allowed)"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_execution_tasks",
            "/executions/{execution}/tasks",
            "List the tasks of an execution",
        )
        .param(Param::number("execution", "Execution ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_task", "/tasks/{id}", "Get one task by ID").param(id()),
        ToolSpec::post(
            "create_task",
            "/executions/{execution}/tasks",
            "Create a task in an execution",
        )
        .params([
            Param::number("execution", "Execution ID").required(),
            Param::text("name", "Task name").required(),
            Param::text("type", "Task type").one_of(TASK_TYPE).required(),
            Param::list("assignedTo", ItemKind::Text, "Assignee accounts"),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::number("module", "Module ID"),
            Param::number("story", "Related story ID"),
        ])
        .params(schedule()),
        ToolSpec::put("update_task", "/tasks/{id}", "Update task fields")
            .params([
                id(),
                Param::text("name", "Task name"),
                Param::text("type", "Task type").one_of(TASK_TYPE),
                Param::text("assignedTo", "Assignee account"),
                Param::number("pri", "Priority, 1 (highest) to 4"),
                Param::number("left", "Remaining hours"),
            ])
            .params(schedule()),
        ToolSpec::delete("delete_task", "/tasks/{id}", "Delete a task").param(id()),
        ToolSpec::post("start_task", "/tasks/{id}/start", "Start a task").params([
            id(),
            Param::number("consumed", "Hours consumed so far"),
            Param::number("left", "Hours remaining").required(),
            Param::text("realStarted", "Actual start time"),
            comment(),
        ]),
        ToolSpec::post("pause_task", "/tasks/{id}/pause", "Pause a task")
            .params([id(), comment()]),
        ToolSpec::post("restart_task", "/tasks/{id}/restart", "Resume a paused task").params([
            id(),
            Param::number("consumed", "Hours consumed so far"),
            Param::number("left", "Hours remaining").required(),
            comment(),
        ]),
        ToolSpec::post("finish_task", "/tasks/{id}/finish", "Finish a task").params([
            id(),
            Param::number("currentConsumed", "Hours consumed by this step").required(),
            Param::text("assignedTo", "Hand the finished task to this account"),
            Param::text("finishedDate", "Finish time"),
            comment(),
        ]),
        ToolSpec::post("close_task", "/tasks/{id}/close", "Close a task")
            .params([id(), comment()]),
        ToolSpec::post("activate_task", "/tasks/{id}/activate", "Reactivate a task").params([
            id(),
            Param::text("assignedTo", "Assignee account"),
            Param::number("left", "Hours remaining").required(),
            comment(),
        ]),
        ToolSpec::post("assign_task", "/tasks/{id}/assignto", "Assign a task").params([
            id(),
            Param::text("assignedTo", "Assignee account").required(),
            Param::number("left", "Hours remaining"),
            comment(),
        ]),
        ToolSpec::post(
            "record_task_effort",
            "/tasks/{id}/estimate",
            "Record effort entries against a task",
        )
        .params([
            id(),
            Param::list(
                "efforts",
                ItemKind::Object,
                "Effort entries: {date, consumed, left, work}",
            )
            .required(),
        ]),
    ]);
}
