//! ZenTao tool catalog and the generic dispatcher.
//!
//! Each domain module contributes a `register` function that adds its
//! [`ToolSpec`]s to a [`ToolRegistry`]. [`ToolRegistry::zentao`] composes
//! them all; [`execute`] runs any spec against a [`Backend`].

mod args;
mod spec;

mod ai;
mod auth;
mod branches;
mod bugs;
mod builds;
mod designs;
mod doc;
mod executions;
mod feedbacks;
mod kanban;
mod personnel;
mod plans;
mod products;
mod projects;
mod requirements;
mod search;
mod stakeholders;
mod stories;
mod tasks;
mod testcases;
mod tickets;
mod tree;
mod users;
mod zanode;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod args_test;
#[cfg(test)]
mod spec_test;

#[cfg(test)]
mod ai_test;
#[cfg(test)]
mod auth_test;
#[cfg(test)]
mod designs_test;
#[cfg(test)]
mod doc_test;
#[cfg(test)]
mod executions_test;
#[cfg(test)]
mod feedbacks_test;
#[cfg(test)]
mod kanban_test;
#[cfg(test)]
mod personnel_test;
#[cfg(test)]
mod testcases_test;
#[cfg(test)]
mod zanode_test;

use std::collections::HashMap;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::client::{Backend, Credentials};

pub use args::{ArgumentError, RequestEnvelope};
pub use spec::{ItemKind, Method, Param, ParamKind, Placement, Target, ToolSpec};

/// Text returned by the credentials tool.
pub const CREDENTIALS_UPDATED: &str = "ZenTao credentials updated";

/// Ordered set of tool specs, looked up by name.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full ZenTao catalog.
    ///
    /// Pure: builds descriptors only, touches no client and does no I/O.
    pub fn zentao() -> Self {
        let mut registry = Self::new();
        auth::register(&mut registry);
        products::register(&mut registry);
        projects::register(&mut registry);
        executions::register(&mut registry);
        stories::register(&mut registry);
        tasks::register(&mut registry);
        bugs::register(&mut registry);
        builds::register(&mut registry);
        plans::register(&mut registry);
        designs::register(&mut registry);
        requirements::register(&mut registry);
        testcases::register(&mut registry);
        tickets::register(&mut registry);
        feedbacks::register(&mut registry);
        kanban::register(&mut registry);
        doc::register(&mut registry);
        ai::register(&mut registry);
        tree::register(&mut registry);
        personnel::register(&mut registry);
        stakeholders::register(&mut registry);
        search::register(&mut registry);
        users::register(&mut registry);
        branches::register(&mut registry);
        zanode::register(&mut registry);
        registry
    }

    /// Add specs in order. A name that is already registered is skipped.
    pub fn register(&mut self, specs: impl IntoIterator<Item = ToolSpec>) {
        for spec in specs {
            if self.index.contains_key(spec.name) {
                warn!(tool = spec.name, "duplicate tool name ignored");
                continue;
            }
            self.index.insert(spec.name, self.specs.len());
            self.specs.push(spec);
        }
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&i| &self.specs[i])
    }

    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    /// MCP tool descriptors in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.specs.iter().map(ToolSpec::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Run one tool invocation.
///
/// Argument problems are protocol errors (`invalid_params`). Backend
/// failures are *successful* calls carrying an error result whose text
/// starts with `Failed to <action>: `, so the calling agent can read them.
#[instrument(skip_all, fields(tool = spec.name))]
pub async fn execute<C: Backend>(
    spec: &ToolSpec,
    client: &C,
    args: &JsonObject,
) -> Result<CallToolResult, McpError> {
    let (method, template) = match spec.target {
        Target::Credentials => {
            let code = args::required_text(args, "code").map_err(invalid_params)?;
            let key = args::required_text(args, "key").map_err(invalid_params)?;
            client.set_credentials(Credentials::new(code, key));
            info!("ZenTao credentials updated");
            return Ok(CallToolResult::success(vec![Content::text(
                CREDENTIALS_UPDATED,
            )]));
        }
        Target::Http { method, path } => (method, path),
    };

    let request =
        RequestEnvelope::build(method, template, &spec.params, args).map_err(invalid_params)?;

    let outcome = match request.method {
        Method::Get => client.get(&request.path).await,
        Method::Post => client.post(&request.path, request.body.as_ref()).await,
        Method::Put => client.put(&request.path, request.body.as_ref()).await,
        Method::Delete => client.delete(&request.path).await,
    };

    match outcome {
        Ok(body) => Ok(CallToolResult::success(vec![Content::text(
            String::from_utf8_lossy(&body).into_owned(),
        )])),
        Err(e) => {
            warn!(error = %e, "ZenTao request failed");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Failed to {}: {}",
                spec.action(),
                e
            ))]))
        }
    }
}

pub(crate) fn invalid_params(e: ArgumentError) -> McpError {
    McpError::invalid_params(e.to_string(), Some(json!({ "parameter": e.parameter() })))
}
