use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, rest_pager};

const MODEL: &[&str] = &["scrum", "waterfall", "kanban", "agileplus", "waterfallplus"];
const ACL: &[&str] = &["open", "private", "program"];

fn fields() -> [Param; 9] {
    [
        Param::text("code", "Project code"),
        Param::text("begin", "Start date, YYYY-MM-DD"),
        Param::text("end", "End date, YYYY-MM-DD"),
        Param::number("parent", "Parent program ID"),
        Param::number("days", "Available working days"),
        Param::number("budget", "Budget"),
        Param::text("PM", "Project manager account"),
        Param::text("desc", "Description (HTML allowed)"),
        Param::text("acl", "Access control").one_of(ACL),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("list_projects", "/projects", "List projects")
            .params(rest_pager()),
        ToolSpec::get("get_project", "/projects/{id}", "Get one project by ID")
            .param(Param::number("id", "Project ID").required()),
        ToolSpec::post("create_project", "/projects", "Create a project")
            .params([
                Param::text("name", "Project name").required(),
                Param::text("model", "Management model").one_of(MODEL),
                Param::list("products", ItemKind::Number, "Linked product IDs"),
            ])
            .params(fields()),
        ToolSpec::put("update_project", "/projects/{id}", "Update a project")
            .params([
                Param::number("id", "Project ID").required(),
                Param::text("name", "Project name"),
                Param::list("products", ItemKind::Number, "Linked product IDs"),
            ])
            .params(fields()),
        ToolSpec::delete("delete_project", "/projects/{id}", "Delete a project")
            .param(Param::number("id", "Project ID").required()),
    ]);
}
