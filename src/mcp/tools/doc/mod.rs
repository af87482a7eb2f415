//! Documentation (legacy `doc` module), registered by sub-topic.

mod catalogs;
mod documents;
mod files;
mod libraries;
mod spaces;

use super::ToolRegistry;

const ACL: &[&str] = &["open", "private"];

pub(super) fn register(registry: &mut ToolRegistry) {
    spaces::register(registry);
    libraries::register(registry);
    documents::register(registry);
    catalogs::register(registry);
    files::register(registry);
}
