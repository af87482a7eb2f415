use super::Method;
use super::testing::{body, request_for};
use serde_json::json;

#[tokio::test]
async fn test_reboot_zanode() {
    let call = request_for("reboot_zanode", json!({"zanodeID": 4})).await;

    assert_eq!(call.method, Method::Post);
    assert_eq!(call.path, "/index.php?m=zanode&f=reboot&t=json&zanodeID=4");
    assert_eq!(call.body, None);
}

/// Restoring names both the node and the snapshot.
#[tokio::test]
async fn test_restore_zanode_snapshot() {
    let call = request_for(
        "restore_zanode_snapshot",
        json!({"zanodeID": 4, "snapshotID": 9}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=zanode&f=restoreSnapshot&t=json&zanodeID=4&snapshotID=9"
    );
}

#[tokio::test]
async fn test_create_zahost() {
    let call = request_for(
        "create_zahost",
        json!({"name": "rack-1", "extranet": "10.0.0.5", "cpuCores": 16, "vsoft": "kvm"}),
    )
    .await;

    assert_eq!(call.path, "/index.php?m=zahost&f=create&t=json");
    assert_eq!(
        call.body,
        body(json!({"name": "rack-1", "extranet": "10.0.0.5", "cpuCores": 16, "vsoft": "kvm"}))
    );
}

#[tokio::test]
async fn test_install_zanode_service() {
    let call = request_for(
        "install_zanode_service",
        json!({"zanodeID": 4, "service": "ztf"}),
    )
    .await;

    assert_eq!(
        call.path,
        "/index.php?m=zanode&f=ajaxInstallService&t=json&nodeID=4"
    );
    assert_eq!(call.body, body(json!({"service": "ztf"})));
}
