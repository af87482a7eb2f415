//! ZenAgent virtual nodes (`zanode`) and their hosts (`zahost`).

mod hosts;
mod nodes;
mod snapshots;

use super::ToolRegistry;

pub(super) fn register(registry: &mut ToolRegistry) {
    nodes::register(registry);
    snapshots::register(registry);
    hosts::register(registry);
}
