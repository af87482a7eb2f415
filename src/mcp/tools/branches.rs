//! Product branches and platforms (legacy `branch` module).

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, legacy_pager};

fn branch_id() -> Param {
    Param::number("branchID", "Branch ID").required()
}

fn product_id() -> Param {
    Param::number("productID", "Product ID").required()
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_branches",
            "/index.php?m=branch&f=manage&t=json",
            "List the branches of a product",
        )
        .params([
            product_id(),
            Param::text("browseType", "active, closed or all"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "create_branch",
            "/index.php?m=branch&f=create&t=json&productID={productID}",
            "Create a branch",
        )
        .params([
            product_id(),
            Param::text("name", "Branch name").required(),
            Param::text("desc", "Description"),
        ]),
        ToolSpec::post(
            "edit_branch",
            "/index.php?m=branch&f=edit&t=json&branchID={branchID}&productID={productID}",
            "Edit a branch",
        )
        .params([
            branch_id(),
            product_id(),
            Param::text("name", "Branch name"),
            Param::text("desc", "Description"),
        ]),
        ToolSpec::post(
            "close_branch",
            "/index.php?m=branch&f=close&t=json&branchID={branchID}",
            "Close a branch",
        )
        .param(branch_id()),
        ToolSpec::post(
            "activate_branch",
            "/index.php?m=branch&f=activate&t=json&branchID={branchID}",
            "Reopen a closed branch",
        )
        .param(branch_id()),
        ToolSpec::post(
            "set_default_branch",
            "/index.php?m=branch&f=setDefault&t=json&productID={productID}&branchID={branchID}",
            "Make a branch the product default",
        )
        .params([product_id(), branch_id()]),
        ToolSpec::post(
            "merge_branches",
            "/index.php?m=branch&f=mergeBranch&t=json&productID={productID}",
            "Merge branches into a target branch",
        )
        .params([
            product_id(),
            Param::list("mergedBranchIDList", ItemKind::Number, "Branches to merge").required(),
            Param::number("targetBranch", "Existing branch receiving the merge"),
            Param::flag("createBranch", "Merge into a newly created branch").digits(),
            Param::text("name", "Name of the new branch when createBranch is set"),
            Param::text("desc", "Description of the new branch"),
        ]),
    ]);
}
