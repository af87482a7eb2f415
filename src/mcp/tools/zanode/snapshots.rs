use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_zanode_snapshots",
            "/index.php?m=zanode&f=browseSnapshot&t=json",
            "List the snapshots of a node",
        )
        .params([
            Param::number("nodeID", "Node ID").required(),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "create_zanode_snapshot",
            "/index.php?m=zanode&f=createSnapshot&t=json&zanodeID={zanodeID}",
            "Snapshot a node",
        )
        .params([
            Param::number("zanodeID", "Node ID").required(),
            Param::text("name", "Snapshot name").required(),
            Param::text("desc", "Description"),
        ]),
        ToolSpec::post(
            "restore_zanode_snapshot",
            "/index.php?m=zanode&f=restoreSnapshot&t=json&zanodeID={zanodeID}&snapshotID={snapshotID}",
            "Roll a node back to a snapshot",
        )
        .params([
            Param::number("zanodeID", "Node ID").required(),
            Param::number("snapshotID", "Snapshot ID").required(),
        ]),
        ToolSpec::get(
            "delete_zanode_snapshot",
            "/index.php?m=zanode&f=deleteSnapshot&t=json&snapshotID={snapshotID}&confirm=yes",
            "Delete a snapshot",
        )
        .param(Param::number("snapshotID", "Snapshot ID").required()),
    ]);
}
