use super::super::ToolRegistry;
use super::super::spec::{ItemKind, Param, ToolSpec, legacy_pager};
use super::ACL;

fn browse() -> [Param; 5] {
    [
        Param::number("libID", "Library to open"),
        Param::number("moduleID", "Catalog to open"),
        Param::text("browseType", "Browse type, e.g. all, draft, bysearch"),
        Param::number("param", "Browse parameter"),
        Param::text("orderBy", "Sort order"),
    ]
}

fn object_space(name: &'static str, path: &'static str, description: &'static str) -> ToolSpec {
    ToolSpec::get(name, path, description)
        .param(Param::number("objectID", "Product, project or team space ID").required())
        .params(browse())
        .params(legacy_pager())
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "get_my_doc_space",
            "/index.php?m=doc&f=mySpace&t=json",
            "Browse the caller's personal document space",
        )
        .param(
            Param::text("type", "Which documents to show")
                .one_of(&["mine", "view", "collect", "createdby", "editedby"]),
        )
        .params(browse())
        .params(legacy_pager()),
        object_space(
            "get_product_doc_space",
            "/index.php?m=doc&f=productSpace&t=json",
            "Browse a product's document space",
        ),
        object_space(
            "get_project_doc_space",
            "/index.php?m=doc&f=projectSpace&t=json",
            "Browse a project's document space",
        ),
        object_space(
            "get_team_doc_space",
            "/index.php?m=doc&f=teamSpace&t=json",
            "Browse a team document space",
        ),
        ToolSpec::post(
            "create_doc_space",
            "/index.php?m=doc&f=createSpace&t=json",
            "Create a team document space",
        )
        .params([
            Param::text("name", "Space name").required(),
            Param::text("acl", "Access control").one_of(ACL),
            Param::list("users", ItemKind::Text, "Accounts allowed when private"),
            Param::text("desc", "Description"),
        ]),
    ]);
}
