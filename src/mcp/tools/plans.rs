use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, rest_pager};

fn id() -> Param {
    Param::number("id", "Plan ID").required()
}

fn linking(
    name: &'static str,
    field: &'static str,
    path: &'static str,
    description: &'static str,
) -> ToolSpec {
    ToolSpec::post(name, path, description).params([
        id(),
        Param::list(field, ItemKind::Number, "Story or bug IDs").required(),
    ])
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_product_plans",
            "/products/{product}/plans",
            "List the release plans of a product",
        )
        .param(Param::number("product", "Product ID").required())
        .params(rest_pager()),
        ToolSpec::get("get_plan", "/productplans/{id}", "Get one plan by ID").param(id()),
        ToolSpec::post(
            "create_plan",
            "/products/{product}/plans",
            "Create a release plan",
        )
        .params([
            Param::number("product", "Product ID").required(),
            Param::text("title", "Plan title").required(),
            Param::text("begin", "Start date, YYYY-MM-DD"),
            Param::text("end", "End date, YYYY-MM-DD"),
            Param::number("parent", "Parent plan ID"),
            Param::text("branch", "Branch ID"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::put("update_plan", "/productplans/{id}", "Update a plan").params([
            id(),
            Param::text("title", "Plan title"),
            Param::text("begin", "Start date, YYYY-MM-DD"),
            Param::text("end", "End date, YYYY-MM-DD"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::delete("delete_plan", "/productplans/{id}", "Delete a plan").param(id()),
        linking(
            "link_plan_stories",
            "stories",
            "/productplans/{id}/linkstories",
            "Link stories to a plan",
        ),
        linking(
            "unlink_plan_stories",
            "stories",
            "/productplans/{id}/unlinkstories",
            "Unlink stories from a plan",
        ),
        linking(
            "link_plan_bugs",
            "bugs",
            "/productplans/{id}/linkbugs",
            "Link bugs to a plan",
        ),
        linking(
            "unlink_plan_bugs",
            "bugs",
            "/productplans/{id}/unlinkbugs",
            "Unlink bugs from a plan",
        ),
    ]);
}
