//! Kanban spaces, boards, board structure and cards (legacy `kanban` module).

use super::ToolRegistry;
use super::spec::{ItemKind, Param, ToolSpec, comment, legacy_pager};

const SPACE_TYPE: &[&str] = &["cooperation", "public", "private"];
const COLUMN_POSITION: &[&str] = &["left", "right"];

fn space_id() -> Param {
    Param::number("spaceID", "Kanban space ID").required()
}

fn kanban_id() -> Param {
    Param::number("kanbanID", "Kanban board ID").required()
}

fn card_id() -> Param {
    Param::number("cardID", "Card ID").required()
}

fn membership() -> [Param; 4] {
    [
        Param::text("owner", "Owner account"),
        Param::list("team", ItemKind::Text, "Member accounts"),
        Param::list("whitelist", ItemKind::Text, "Accounts allowed to view"),
        Param::text("desc", "Description (HTML allowed)"),
    ]
}

fn card_fields() -> [Param; 6] {
    [
        Param::list("assignedTo", ItemKind::Text, "Assignee accounts"),
        Param::number("estimate", "Estimate in hours"),
        Param::text("begin", "Start date, YYYY-MM-DD"),
        Param::text("end", "End date, YYYY-MM-DD"),
        Param::number("pri", "Priority, 1 (highest) to 4"),
        Param::text("desc", "Description (HTML allowed)"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    register_spaces(registry);
    register_boards(registry);
    register_structure(registry);
    register_cards(registry);
}

fn register_spaces(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_kanban_spaces",
            "/index.php?m=kanban&f=space&t=json",
            "List kanban spaces",
        )
        .params([
            Param::text("browseType", "Which spaces to list")
                .one_of(&["involved", "cooperation", "public", "private"]),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "create_kanban_space",
            "/index.php?m=kanban&f=createSpace&t=json",
            "Create a kanban space",
        )
        .params([
            Param::text("name", "Space name").required(),
            Param::text("type", "Space type").one_of(SPACE_TYPE).required(),
        ])
        .params(membership()),
        ToolSpec::post(
            "edit_kanban_space",
            "/index.php?m=kanban&f=editSpace&t=json&spaceID={spaceID}",
            "Edit a kanban space",
        )
        .params([space_id(), Param::text("name", "Space name")])
        .params(membership()),
        ToolSpec::post(
            "close_kanban_space",
            "/index.php?m=kanban&f=closeSpace&t=json&spaceID={spaceID}",
            "Close a kanban space",
        )
        .params([space_id(), comment()]),
        ToolSpec::get(
            "delete_kanban_space",
            "/index.php?m=kanban&f=deleteSpace&t=json&spaceID={spaceID}&confirm=yes",
            "Delete a kanban space",
        )
        .param(space_id()),
    ]);
}

fn register_boards(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_kanban",
            "/index.php?m=kanban&f=create&t=json&spaceID={spaceID}",
            "Create a kanban board in a space",
        )
        .params([
            space_id(),
            Param::text("name", "Board name").required(),
            Param::number("colWidth", "Column width in pixels"),
        ])
        .params(membership()),
        ToolSpec::get(
            "get_kanban",
            "/index.php?m=kanban&f=view&t=json",
            "Get a kanban board with its regions, lanes and cards",
        )
        .param(kanban_id()),
        ToolSpec::post(
            "edit_kanban",
            "/index.php?m=kanban&f=edit&t=json&kanbanID={kanbanID}",
            "Edit a kanban board",
        )
        .params([
            kanban_id(),
            Param::text("name", "Board name"),
            Param::number("colWidth", "Column width in pixels"),
        ])
        .params(membership()),
        ToolSpec::get(
            "delete_kanban",
            "/index.php?m=kanban&f=delete&t=json&kanbanID={kanbanID}&confirm=yes",
            "Delete a kanban board",
        )
        .param(kanban_id()),
    ]);
}

fn register_structure(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_kanban_region",
            "/index.php?m=kanban&f=createRegion&t=json&kanbanID={kanbanID}",
            "Add a region to a board",
        )
        .params([kanban_id(), Param::text("name", "Region name").required()]),
        ToolSpec::post(
            "create_kanban_lane",
            "/index.php?m=kanban&f=createLane&t=json&kanbanID={kanbanID}&regionID={regionID}",
            "Add a swimlane to a region",
        )
        .params([
            kanban_id(),
            Param::number("regionID", "Region ID").required(),
            Param::text("name", "Lane name").required(),
            Param::text("color", "Lane color, e.g. #7ec5ff"),
        ]),
        ToolSpec::post(
            "create_kanban_column",
            "/index.php?m=kanban&f=createColumn&t=json&columnID={columnID}&position={position}",
            "Add a column next to an existing one",
        )
        .params([
            Param::number("columnID", "Reference column ID").required(),
            Param::text("position", "Side of the reference column")
                .one_of(COLUMN_POSITION)
                .required(),
            Param::text("name", "Column name").required(),
            Param::number("limit", "WIP limit"),
            Param::text("color", "Column color"),
        ]),
        ToolSpec::post(
            "set_kanban_column_wip",
            "/index.php?m=kanban&f=setWIP&t=json&columnID={columnID}",
            "Set the work-in-progress limit of a column",
        )
        .params([
            Param::number("columnID", "Column ID").required(),
            Param::number("WIPCount", "Maximum cards in the column"),
            Param::flag("noLimit", "Remove the limit").digits(),
        ]),
    ]);
}

fn register_cards(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::post(
            "create_kanban_card",
            "/index.php?m=kanban&f=createCard&t=json&kanbanID={kanbanID}&regionID={regionID}&groupID={groupID}&columnID={columnID}",
            "Create a card in a column",
        )
        .params([
            kanban_id(),
            Param::number("regionID", "Region ID").required(),
            Param::number("groupID", "Lane group ID").required(),
            Param::number("columnID", "Column ID").required(),
            Param::text("name", "Card name").required(),
        ])
        .params(card_fields()),
        ToolSpec::get(
            "get_kanban_card",
            "/index.php?m=kanban&f=viewCard&t=json",
            "Get one card by ID",
        )
        .param(card_id()),
        ToolSpec::post(
            "edit_kanban_card",
            "/index.php?m=kanban&f=editCard&t=json&cardID={cardID}",
            "Edit a card",
        )
        .params([
            card_id(),
            Param::text("name", "Card name"),
            Param::number("progress", "Progress percentage"),
        ])
        .params(card_fields()),
        ToolSpec::post(
            "move_kanban_card",
            "/index.php?m=kanban&f=moveCard&t=json&cardID={cardID}&fromColID={fromColID}&toColID={toColID}&fromLaneID={fromLaneID}&toLaneID={toLaneID}&kanbanID={kanbanID}",
            "Move a card between columns or lanes",
        )
        .params([
            card_id(),
            Param::number("fromColID", "Source column ID").required(),
            Param::number("toColID", "Target column ID").required(),
            Param::number("fromLaneID", "Source lane ID").required(),
            Param::number("toLaneID", "Target lane ID").required(),
            kanban_id(),
        ]),
        ToolSpec::post(
            "finish_kanban_card",
            "/index.php?m=kanban&f=finishCard&t=json&cardID={cardID}&kanbanID={kanbanID}",
            "Mark a card done",
        )
        .params([card_id(), kanban_id()]),
        ToolSpec::post(
            "activate_kanban_card",
            "/index.php?m=kanban&f=activateCard&t=json&cardID={cardID}&kanbanID={kanbanID}",
            "Reopen a finished card",
        )
        .params([
            card_id(),
            kanban_id(),
            Param::number("progress", "Progress percentage"),
            comment(),
        ]),
        ToolSpec::post(
            "archive_kanban_card",
            "/index.php?m=kanban&f=archiveCard&t=json&cardID={cardID}",
            "Archive a card",
        )
        .param(card_id()),
        ToolSpec::get(
            "delete_kanban_card",
            "/index.php?m=kanban&f=deleteCard&t=json&cardID={cardID}&confirm=yes",
            "Delete a card",
        )
        .param(card_id()),
    ]);
}
