//! Stories: REST CRUD plus review/assign/activate from the legacy `story` module.

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, rest_pager};

const CATEGORY: &[&str] = &[
    "feature",
    "interface",
    "performance",
    "safe",
    "experience",
    "improve",
    "other",
];
const SOURCE: &[&str] = &[
    "customer", "user", "po", "market", "service", "operation", "support", "competitor",
    "partner", "dev", "tester", "bug", "forum", "other",
];
const CLOSED_REASON: &[&str] = &[
    "done",
    "subdivided",
    "duplicate",
    "postponed",
    "willnotdo",
    "cancel",
    "bydesign",
];
const REVIEW_RESULT: &[&str] = &["pass", "revert", "clarify", "reject"];

fn optional_fields() -> [Param; 7] {
    [
        Param::number("module", "Module ID"),
        Param::number("plan", "Plan ID"),
        Param::text("source", "Where the story came from").one_of(SOURCE),
        Param::text("sourceNote", "Source note"),
        Param::number("estimate", "Estimate in hours"),
        Param::text("verify", "Acceptance criteria"),
        Param::text("keywords", "Keywords"),
    ]
}

fn story_id() -> Param {
    Param::number("storyID", "Story ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    register_rest(registry);
    register_review(registry);
}

fn register_rest(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_product_stories",
            "/products/{product}/stories",
            "List the stories of a product",
        )
        .params([
            Param::number("product", "Product ID").required(),
            Param::text("status", "Filter by status"),
        ])
        .params(rest_pager()),
        ToolSpec::get(
            "list_project_stories",
            "/projects/{project}/stories",
            "List the stories linked to a project",
        )
        .param(Param::number("project", "Project ID").required())
        .params(rest_pager()),
        ToolSpec::get(
            "list_execution_stories",
            "/executions/{execution}/stories",
            "List the stories linked to an execution",
        )
        .param(Param::number("execution", "Execution ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_story", "/stories/{id}", "Get one story by ID")
            .param(Param::number("id", "Story ID").required()),
        ToolSpec::post(
            "create_story",
            "/products/{product}/stories",
            "Create a story in a product",
        )
        .params([
            Param::number("product", "Product ID").required(),
            Param::text("title", "Story title").required(),
            Param::text("spec", "Story description").required(),
            Param::number("pri", "Priority, 1 (highest) to 4").required(),
            Param::text("category", "Story category")
                .one_of(CATEGORY)
                .required(),
            Param::list("reviewer", ItemKind::Text, "Reviewer accounts"),
            Param::flag("needNotReview", "Skip review").digits(),
        ])
        .params(optional_fields()),
        ToolSpec::put("update_story", "/stories/{id}", "Update story fields")
            .params([
                Param::number("id", "Story ID").required(),
                Param::text("title", "Story title"),
                Param::number("pri", "Priority, 1 (highest) to 4"),
                Param::text("category", "Story category").one_of(CATEGORY),
                Param::text("assignedTo", "Assignee account"),
            ])
            .params(optional_fields()),
        ToolSpec::post(
            "change_story",
            "/stories/{id}/change",
            "Change the content of a story, creating a new version",
        )
        .params([
            Param::number("id", "Story ID").required(),
            Param::text("title", "New title"),
            Param::text("spec", "New description"),
            Param::text("verify", "New acceptance criteria"),
            comment(),
        ]),
        ToolSpec::post("close_story", "/stories/{id}/close", "Close a story")
            .params([
                Param::number("id", "Story ID").required(),
                Param::text("closedReason", "Why the story is closed")
                    .one_of(CLOSED_REASON)
                    .required(),
                Param::number("duplicateStory", "Duplicate story ID when closedReason is duplicate"),
                comment(),
            ]),
        ToolSpec::delete("delete_story", "/stories/{id}", "Delete a story")
            .param(Param::number("id", "Story ID").required()),
    ]);
}

fn register_review(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "review_story",
            "/index.php?m=story&f=review&t=json&storyID={storyID}",
            "Record a review decision on a story",
        )
        .params([
            story_id(),
            Param::text("result", "Review result")
                .one_of(REVIEW_RESULT)
                .required(),
            Param::text("closedReason", "Reason when the result is reject").one_of(CLOSED_REASON),
            Param::number("pri", "Adjusted priority"),
            Param::number("estimate", "Adjusted estimate in hours"),
            comment(),
        ]),
        ToolSpec::post(
            "assign_story",
            "/index.php?m=story&f=assignTo&t=json&storyID={storyID}",
            "Assign a story to a user",
        )
        .params([
            story_id(),
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
        ToolSpec::post(
            "activate_story",
            "/index.php?m=story&f=activate&t=json&storyID={storyID}",
            "Reactivate a closed story",
        )
        .params([
            story_id(),
            Param::text("assignedTo", "Assignee account"),
            comment(),
        ]),
    ]);
}
