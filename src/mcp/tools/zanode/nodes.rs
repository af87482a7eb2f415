use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

fn zanode_id() -> Param {
    Param::number("zanodeID", "Node ID").required()
}

fn power(name: &'static str, path: &'static str, description: &'static str) -> ToolSpec {
    ToolSpec::post(name, path, description).param(zanode_id())
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_zanodes",
            "/index.php?m=zanode&f=browse&t=json",
            "List execution nodes",
        )
        .params([
            Param::text("browseType", "all, running, shutoff or bysearch"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get("get_zanode", "/index.php?m=zanode&f=view&t=json", "Get one node")
            .param(zanode_id()),
        ToolSpec::post(
            "create_zanode",
            "/index.php?m=zanode&f=create&t=json",
            "Create a node on a host",
        )
        .params([
            Param::text("name", "Node name").required(),
            Param::text("hostType", "physics for a bare-metal node, empty for a VM"),
            Param::number("parent", "Host ID"),
            Param::number("image", "Image ID"),
            Param::number("cpuCores", "CPU cores"),
            Param::number("memory", "Memory in GB"),
            Param::number("diskSize", "Disk size in GB"),
            Param::text("osName", "Operating system"),
            Param::text("desc", "Description"),
        ]),
        ToolSpec::post(
            "edit_zanode",
            "/index.php?m=zanode&f=edit&t=json&zanodeID={zanodeID}",
            "Edit a node",
        )
        .params([
            zanode_id(),
            Param::text("name", "Node name"),
            Param::text("desc", "Description"),
        ]),
        power(
            "destroy_zanode",
            "/index.php?m=zanode&f=destroy&t=json&zanodeID={zanodeID}",
            "Destroy a node and free its resources",
        ),
        power(
            "start_zanode",
            "/index.php?m=zanode&f=start&t=json&zanodeID={zanodeID}",
            "Boot a node",
        ),
        power(
            "close_zanode",
            "/index.php?m=zanode&f=close&t=json&zanodeID={zanodeID}",
            "Shut a node down",
        ),
        power(
            "suspend_zanode",
            "/index.php?m=zanode&f=suspend&t=json&zanodeID={zanodeID}",
            "Suspend a node",
        ),
        power(
            "resume_zanode",
            "/index.php?m=zanode&f=resume&t=json&zanodeID={zanodeID}",
            "Resume a suspended node",
        ),
        power(
            "reboot_zanode",
            "/index.php?m=zanode&f=reboot&t=json&zanodeID={zanodeID}",
            "Reboot a node",
        ),
        ToolSpec::get(
            "get_zanode_vnc",
            "/index.php?m=zanode&f=getVNC&t=json",
            "Get VNC connection details for a node",
        )
        .param(zanode_id()),
        ToolSpec::get(
            "get_zanode_service_status",
            "/index.php?m=zanode&f=ajaxGetServiceStatus&t=json",
            "Get the status of the agent services on a node",
        )
        .param(zanode_id()),
        ToolSpec::post(
            "install_zanode_service",
            "/index.php?m=zanode&f=ajaxInstallService&t=json&nodeID={zanodeID}",
            "Install an agent service on a node",
        )
        .params([
            zanode_id(),
            Param::text("service", "Service name, e.g. ztf or zendata").required(),
        ]),
        ToolSpec::post(
            "create_zanode_image",
            "/index.php?m=zanode&f=createImage&t=json&zanodeID={zanodeID}",
            "Export a node as a reusable image",
        )
        .params([
            zanode_id(),
            Param::text("name", "Image name").required(),
            Param::text("desc", "Description"),
        ]),
    ]);
}
