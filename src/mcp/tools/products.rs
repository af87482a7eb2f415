use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, rest_pager};

const ACL: &[&str] = &["open", "private"];
const PRODUCT_TYPE: &[&str] = &["normal", "branch", "platform"];

fn fields() -> [Param; 9] {
    [
        Param::text("code", "Product code"),
        Param::number("program", "Owning program ID"),
        Param::number("line", "Product line ID"),
        Param::text("PO", "Product owner account"),
        Param::text("QD", "Test manager account"),
        Param::text("RD", "Release manager account"),
        Param::text("type", "Product type").one_of(PRODUCT_TYPE),
        Param::text("desc", "Description (HTML allowed)"),
        Param::text("acl", "Access control").one_of(ACL),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("list_products", "/products", "List products visible to the caller")
            .params(rest_pager()),
        ToolSpec::get("get_product", "/products/{id}", "Get one product by ID")
            .param(Param::number("id", "Product ID").required()),
        ToolSpec::post("create_product", "/products", "Create a product")
            .param(Param::text("name", "Product name").required())
            .params(fields())
            .param(Param::list("whitelist", ItemKind::Text, "Accounts allowed when acl is private")),
        ToolSpec::put("update_product", "/products/{id}", "Update a product")
            .param(Param::number("id", "Product ID").required())
            .param(Param::text("name", "Product name"))
            .params(fields())
            .param(Param::list("whitelist", ItemKind::Text, "Accounts allowed when acl is private")),
        ToolSpec::delete("delete_product", "/products/{id}", "Delete a product")
            .param(Param::number("id", "Product ID").required()),
    ]);
}
