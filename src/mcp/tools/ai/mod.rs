//! AI features: the `ai` admin module and the `aiapp` app square.

mod assistants;
mod miniprograms;
mod models;
mod prompts;
mod square;

use super::ToolRegistry;

pub(super) fn register(registry: &mut ToolRegistry) {
    models::register(registry);
    prompts::register(registry);
    miniprograms::register(registry);
    assistants::register(registry);
    square::register(registry);
}
