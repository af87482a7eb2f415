//! User requirements (stories of type `requirement`), legacy modules.

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, legacy_pager};

const REVIEW_RESULT: &[&str] = &["pass", "revert", "clarify", "reject"];
const CLOSED_REASON: &[&str] = &[
    "done",
    "subdivided",
    "duplicate",
    "postponed",
    "willnotdo",
    "cancel",
    "bydesign",
];

fn story_id() -> Param {
    Param::number("storyID", "Requirement ID").required()
}

fn content() -> [Param; 5] {
    [
        Param::number("module", "Module ID"),
        Param::text("source", "Where the requirement came from"),
        Param::text("verify", "Acceptance criteria"),
        Param::number("estimate", "Estimate in hours"),
        Param::text("keywords", "Keywords"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_requirements",
            "/index.php?m=product&f=browse&t=json&storyType=requirement",
            "List the requirements of a product",
        )
        .params([
            Param::number("productID", "Product ID").required(),
            Param::text("branch", "Branch ID or all"),
            Param::text("browseType", "Browse type, e.g. unclosed, allstory, assignedtome"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_requirement",
            "/index.php?m=requirement&f=view&t=json",
            "Get one requirement by ID",
        )
        .params([story_id(), Param::number("version", "Version to show")]),
        ToolSpec::post(
            "create_requirement",
            "/index.php?m=requirement&f=create&t=json&productID={productID}",
            "Create a requirement",
        )
        .params([
            Param::number("productID", "Product ID").required(),
            Param::text("title", "Requirement title").required(),
            Param::text("spec", "Requirement description").required(),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::list("reviewer", ItemKind::Text, "Reviewer accounts"),
            Param::flag("needNotReview", "Skip review").digits(),
        ])
        .params(content()),
        ToolSpec::post(
            "update_requirement",
            "/index.php?m=requirement&f=edit&t=json&storyID={storyID}",
            "Edit requirement fields",
        )
        .params([
            story_id(),
            Param::text("title", "Requirement title"),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::text("assignedTo", "Assignee account"),
        ])
        .params(content()),
        ToolSpec::post(
            "change_requirement",
            "/index.php?m=requirement&f=change&t=json&storyID={storyID}",
            "Change requirement content, creating a new version",
        )
        .params([
            story_id(),
            Param::text("title", "New title"),
            Param::text("spec", "New description"),
            Param::text("verify", "New acceptance criteria"),
            comment(),
        ]),
        ToolSpec::post(
            "review_requirement",
            "/index.php?m=requirement&f=review&t=json&storyID={storyID}",
            "Record a review decision on a requirement",
        )
        .params([
            story_id(),
            Param::text("result", "Review result")
                .one_of(REVIEW_RESULT)
                .required(),
            Param::text("closedReason", "Reason when the result is reject").one_of(CLOSED_REASON),
            comment(),
        ]),
        ToolSpec::post(
            "close_requirement",
            "/index.php?m=requirement&f=close&t=json&storyID={storyID}",
            "Close a requirement",
        )
        .params([
            story_id(),
            Param::text("closedReason", "Why it is closed")
                .one_of(CLOSED_REASON)
                .required(),
            comment(),
        ]),
        ToolSpec::post(
            "activate_requirement",
            "/index.php?m=requirement&f=activate&t=json&storyID={storyID}",
            "Reactivate a closed requirement",
        )
        .params([
            story_id(),
            Param::text("assignedTo", "Assignee account"),
            comment(),
        ]),
        ToolSpec::post(
            "assign_requirement",
            "/index.php?m=requirement&f=assignTo&t=json&storyID={storyID}",
            "Assign a requirement",
        )
        .params([
            story_id(),
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
        ToolSpec::get(
            "delete_requirement",
            "/index.php?m=requirement&f=delete&t=json&storyID={storyID}&confirm=yes",
            "Delete a requirement",
        )
        .param(story_id()),
        ToolSpec::post(
            "link_requirement_stories",
            "/index.php?m=requirement&f=linkStory&t=json&storyID={storyID}",
            "Link stories to a requirement",
        )
        .params([
            story_id(),
            Param::list("stories", ItemKind::Number, "Story IDs").required(),
        ]),
    ]);
}
