//! Application credential login.

use super::ToolRegistry;
use super::spec::{Param, ToolSpec};

pub(super) fn register(registry: &mut ToolRegistry) {
    registry.register([ToolSpec::credentials(
        "zentao_login",
        "Set the ZenTao application code and key used to sign every later request. \
         Issues no request; bad credentials surface on the next call.",
    )
    .params([
        Param::text("code", "Application code configured in ZenTao").required(),
        Param::text("key", "Application secret key").required(),
    ])]);
}
