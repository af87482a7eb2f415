use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, legacy_pager, rest_pager};

const CASE_TYPE: &[&str] = &[
    "feature",
    "performance",
    "config",
    "install",
    "security",
    "interface",
    "unit",
    "other",
];

fn id() -> Param {
    Param::number("id", "Test case ID").required()
}

fn details() -> [Param; 7] {
    [
        Param::number("module", "Module ID"),
        Param::number("story", "Related story ID"),
        Param::number("pri", "Priority, 1 (highest) to 4"),
        Param::text("precondition", "Preconditions"),
        Param::list("steps", ItemKind::Object, "Steps: {desc, expect}"),
        Param::list("stage", ItemKind::Text, "Applicable stages"),
        Param::text("keywords", "Keywords"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_product_testcases",
            "/products/{product}/testcases",
            "List the test cases of a product",
        )
        .param(Param::number("product", "Product ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_testcase", "/testcases/{id}", "Get one test case by ID").param(id()),
        ToolSpec::post(
            "create_testcase",
            "/products/{product}/testcases",
            "Create a test case",
        )
        .params([
            Param::number("product", "Product ID").required(),
            Param::text("title", "Case title").required(),
            Param::text("type", "Case type").one_of(CASE_TYPE).required(),
        ])
        .params(details()),
        ToolSpec::put("update_testcase", "/testcases/{id}", "Update a test case")
            .params([
                id(),
                Param::text("title", "Case title"),
                Param::text("type", "Case type").one_of(CASE_TYPE),
            ])
            .params(details()),
        ToolSpec::delete("delete_testcase", "/testcases/{id}", "Delete a test case").param(id()),
        ToolSpec::post(
            "run_testcase",
            "/testcases/{id}/results",
            "Record the result of running a test case",
        )
        .params([
            id(),
            Param::number("testtask", "Test task the run belongs to").in_query(),
            Param::number("version", "Case version that was run"),
            Param::list("steps", ItemKind::Object, "Per-step results: {result, real}").required(),
        ]),
        ToolSpec::get(
            "list_project_testtasks",
            "/projects/{project}/testtasks",
            "List the test tasks of a project",
        )
        .param(Param::number("project", "Project ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_testtask", "/testtasks/{id}", "Get one test task by ID")
            .param(Param::number("id", "Test task ID").required()),
    ]);

    registry.register([ToolSpec::get(
        "list_testtask_cases",
        "/index.php?m=testtask&f=cases&t=json",
        "List the cases in a test task",
    )
    .params([
        Param::number("taskID", "Test task ID").required(),
        Param::text("browseType", "Browse type, e.g. all, assignedtome, bysuite"),
        Param::number("param", "Browse parameter"),
        Param::text("orderBy", "Sort order"),
    ])
    .params(legacy_pager())]);
}
