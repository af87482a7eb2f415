use super::ToolRegistry;
use super::spec::{Param, ToolSpec, rest_pager};

const GENDER: &[&str] = &["f", "m"];

fn id() -> Param {
    Param::number("id", "User ID").required()
}

fn profile() -> [Param; 6] {
    [
        Param::text("realname", "Display name"),
        Param::text("role", "Job role, e.g. dev, qa, pm"),
        Param::number("dept", "Department ID"),
        Param::text("email", "Email"),
        Param::text("mobile", "Mobile phone"),
        Param::text("gender", "Gender").one_of(GENDER),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("list_users", "/users", "List users").params(rest_pager()),
        ToolSpec::get("get_user", "/users/{id}", "Get one user by ID").param(id()),
        ToolSpec::get("get_current_user", "/user", "Get the authenticated user's profile"),
        ToolSpec::post("create_user", "/users", "Create a user")
            .params([
                Param::text("account", "Login name").required(),
                Param::text("password", "Initial password").required(),
            ])
            .params(profile()),
        ToolSpec::put("update_user", "/users/{id}", "Update a user")
            .param(id())
            .params(profile()),
        ToolSpec::delete("delete_user", "/users/{id}", "Delete a user").param(id()),
    ]);
}
