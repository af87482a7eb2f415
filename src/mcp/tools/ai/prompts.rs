use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

const PROMPT_MODULE: &[&str] = &[
    "my", "product", "project", "execution", "story", "task", "bug", "case", "doc",
];

fn prompt_id() -> Param {
    Param::number("promptID", "Prompt ID").required()
}

fn toggle(name: &'static str, path: &'static str, description: &'static str) -> ToolSpec {
    ToolSpec::post(name, path, description).param(prompt_id())
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_ai_prompts",
            "/index.php?m=ai&f=prompts&t=json",
            "List prompts",
        )
        .params([
            Param::text("module", "Object type the prompt works on").one_of(PROMPT_MODULE),
            Param::text("status", "draft or active"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get(
            "get_ai_prompt",
            "/index.php?m=ai&f=promptView&t=json",
            "Get one prompt",
        )
        .param(prompt_id()),
        ToolSpec::post(
            "create_ai_prompt",
            "/index.php?m=ai&f=promptCreate&t=json",
            "Create a prompt",
        )
        .params([
            Param::text("name", "Prompt name").required(),
            Param::text("module", "Object type the prompt works on")
                .one_of(PROMPT_MODULE)
                .required(),
            Param::text("desc", "Description"),
        ]),
        ToolSpec::post(
            "edit_ai_prompt",
            "/index.php?m=ai&f=promptEdit&t=json&promptID={promptID}",
            "Edit a prompt",
        )
        .params([
            prompt_id(),
            Param::text("name", "Prompt name"),
            Param::text("desc", "Description"),
            Param::text("source", "Object fields fed to the model, comma separated"),
            Param::text("role", "Role the model plays"),
            Param::text("characterization", "Role characterization"),
            Param::text("purpose", "What the prompt asks for"),
            Param::text("elaboration", "Additional instructions"),
            Param::text("targetForm", "Where the output is applied"),
        ]),
        toggle(
            "publish_ai_prompt",
            "/index.php?m=ai&f=promptPublish&t=json&promptID={promptID}",
            "Publish a prompt",
        ),
        toggle(
            "unpublish_ai_prompt",
            "/index.php?m=ai&f=promptUnpublish&t=json&promptID={promptID}",
            "Unpublish a prompt",
        ),
        ToolSpec::get(
            "delete_ai_prompt",
            "/index.php?m=ai&f=promptDelete&t=json&promptID={promptID}&confirm=yes",
            "Delete a prompt",
        )
        .param(prompt_id()),
        ToolSpec::post(
            "execute_ai_prompt",
            "/index.php?m=ai&f=promptExecute&t=json&promptId={promptID}&objectId={objectID}",
            "Run a prompt against one object",
        )
        .params([
            prompt_id(),
            Param::number("objectID", "ID of the story, task, bug or other object").required(),
        ]),
    ]);
}
