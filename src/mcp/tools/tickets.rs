use super::ToolRegistry;
use super::spec::{Param, ToolSpec, comment, rest_pager};

const TICKET_TYPE: &[&str] = &["code", "data", "stuck", "security", "affair"];
const CLOSED_REASON: &[&str] = &["commented", "repeat", "refuse"];

fn id() -> Param {
    Param::number("id", "Ticket ID").required()
}

fn action(name: &'static str, path: &'static str, description: &'static str) -> ToolSpec {
    ToolSpec::post(name, path, description).param(id())
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get("list_tickets", "/tickets", "List tickets")
            .params([
                Param::number("product", "Restrict to one product"),
                Param::text("browseType", "Browse type, e.g. all, unclosed, assignedtome"),
            ])
            .params(rest_pager()),
        ToolSpec::get("get_ticket", "/tickets/{id}", "Get one ticket by ID").param(id()),
        ToolSpec::post("create_ticket", "/tickets", "Open a ticket").params([
            Param::number("product", "Product ID").required(),
            Param::text("title", "Ticket title").required(),
            Param::number("module", "Module ID"),
            Param::text("type", "Ticket type").one_of(TICKET_TYPE),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::text("assignedTo", "Assignee account"),
            Param::text("deadline", "Deadline, YYYY-MM-DD"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::put("update_ticket", "/tickets/{id}", "Update a ticket").params([
            id(),
            Param::text("title", "Ticket title"),
            Param::number("module", "Module ID"),
            Param::text("type", "Ticket type").one_of(TICKET_TYPE),
            Param::number("pri", "Priority, 1 (highest) to 4"),
            Param::text("deadline", "Deadline, YYYY-MM-DD"),
            Param::text("desc", "Description (HTML allowed)"),
        ]),
        ToolSpec::delete("delete_ticket", "/tickets/{id}", "Delete a ticket").param(id()),
        action("assign_ticket", "/tickets/{id}/assign", "Assign a ticket").params([
            Param::text("assignedTo", "Assignee account").required(),
            comment(),
        ]),
        action("start_ticket", "/tickets/{id}/start", "Start working on a ticket").params([
            Param::number("consumed", "Hours consumed so far"),
            comment(),
        ]),
        action("finish_ticket", "/tickets/{id}/finish", "Finish a ticket").params([
            Param::text("resolution", "How the ticket was handled"),
            Param::number("consumed", "Hours consumed"),
            comment(),
        ]),
        action("close_ticket", "/tickets/{id}/close", "Close a ticket").params([
            Param::text("closedReason", "Why the ticket is closed").one_of(CLOSED_REASON),
            comment(),
        ]),
        action("activate_ticket", "/tickets/{id}/activate", "Reopen a ticket").params([
            Param::text("assignedTo", "Assignee account"),
            comment(),
        ]),
    ]);
}
