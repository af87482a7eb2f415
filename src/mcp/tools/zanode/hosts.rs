use super::super::ToolRegistry;
use super::super::spec::{Param, ToolSpec, legacy_pager};

fn host_id() -> Param {
    Param::number("hostID", "Host ID").required()
}

fn capacity() -> [Param; 5] {
    [
        Param::number("cpuCores", "CPU cores"),
        Param::number("memory", "Memory in GB"),
        Param::number("diskSize", "Disk size in GB"),
        Param::text("vsoft", "Virtualization software").one_of(&["kvm"]),
        Param::text("desc", "Description"),
    ]
}

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([
        ToolSpec::get(
            "list_zahosts",
            "/index.php?m=zahost&f=browse&t=json",
            "List virtualization hosts",
        )
        .params([
            Param::text("browseType", "all or bysearch"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::get("get_zahost", "/index.php?m=zahost&f=view&t=json", "Get one host")
            .param(host_id()),
        ToolSpec::post(
            "create_zahost",
            "/index.php?m=zahost&f=create&t=json",
            "Register a host",
        )
        .params([
            Param::text("name", "Host name").required(),
            Param::text("extranet", "Host IP or domain").required(),
        ])
        .params(capacity()),
        ToolSpec::post(
            "edit_zahost",
            "/index.php?m=zahost&f=edit&t=json&hostID={hostID}",
            "Edit a host",
        )
        .params([
            host_id(),
            Param::text("name", "Host name"),
            Param::text("extranet", "Host IP or domain"),
        ])
        .params(capacity()),
        ToolSpec::get(
            "delete_zahost",
            "/index.php?m=zahost&f=delete&t=json&hostID={hostID}&confirm=yes",
            "Remove a host",
        )
        .param(host_id()),
        ToolSpec::get(
            "list_zahost_images",
            "/index.php?m=zahost&f=browseImage&t=json",
            "List the images available on a host",
        )
        .params([
            host_id(),
            Param::text("browseType", "Browse type"),
            Param::number("param", "Browse parameter"),
            Param::text("orderBy", "Sort order"),
        ])
        .params(legacy_pager()),
        ToolSpec::post(
            "download_zahost_image",
            "/index.php?m=zahost&f=downloadImage&t=json&hostID={hostID}&imageID={imageID}",
            "Start downloading an image to a host",
        )
        .params([
            host_id(),
            Param::number("imageID", "Image ID").required(),
        ]),
        ToolSpec::post(
            "cancel_zahost_image_download",
            "/index.php?m=zahost&f=cancelDownload&t=json&imageID={imageID}",
            "Cancel an in-progress image download",
        )
        .param(Param::number("imageID", "Image ID").required()),
    ]);
}
