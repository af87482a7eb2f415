use super::ToolRegistry;
use super::spec::{Param, ToolSpec, comment, rest_pager};

const FEEDBACK_TYPE: &[&str] = &["story", "task", "bug", "todo", "advice", "issue", "risk", "opportunity"];
const CLOSED_REASON: &[&str] = &["commented", "repeat", "refuse"];
const REVIEW_RESULT: &[&str] = &["pass", "clarify"];

fn id() -> Param {
    Param::number("id", "Feedback ID").required()
}

fn content() -> [Param; 7] {
    [
        Param::number("module", "Module ID"),
        Param::text("type", "Feedback type").one_of(FEEDBACK_TYPE),
        Param::number("pri", "Priority, 1 (highest) to 4"),
        Param::text("desc", "Description (HTML allowed)"),
        Param::flag("public", "Visible to everyone").digits(),
        Param::flag("notify", "Notify the submitter of changes").digits(),
        Param::text("notifyEmail", "Address that receives notifications"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("list_feedbacks", "/feedbacks", "List feedback")
            .params([
                Param::number("product", "Restrict to one product"),
                Param::text("browseType", "Browse type, e.g. all, wait, doing"),
            ])
            .params(rest_pager()),
        ToolSpec::get("get_feedback", "/feedbacks/{id}", "Get one feedback by ID").param(id()),
        ToolSpec::post("create_feedback", "/feedbacks", "Submit feedback")
            .params([
                Param::number("product", "Product ID").required(),
                Param::text("title", "Feedback title").required(),
                Param::text("feedbackBy", "Submitter name"),
            ])
            .params(content()),
        ToolSpec::put("update_feedback", "/feedbacks/{id}", "Update feedback")
            .params([id(), Param::text("title", "Feedback title")])
            .params(content()),
        ToolSpec::delete("delete_feedback", "/feedbacks/{id}", "Delete feedback").param(id()),
        ToolSpec::put("assign_feedback", "/feedbacks/{id}/assign", "Assign feedback").params([
            id(),
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
        ToolSpec::put("close_feedback", "/feedbacks/{id}/close", "Close feedback").params([
            id(),
            Param::text("closedReason", "Why the feedback is closed").one_of(CLOSED_REASON),
            comment(),
        ]),
        ToolSpec::post("review_feedback", "/feedbacks/{id}/review", "Review feedback").params([
            id(),
            Param::text("result", "Review result").one_of(REVIEW_RESULT).required(),
            comment(),
        ]),
    ]);
}
