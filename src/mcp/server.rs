//! MCP server implementation
//!
//! Tools are not generated per handler method. The server holds the ZenTao
//! [`ToolRegistry`] and answers `tools/list` and `tools/call` from it, so a
//! single dispatcher serves the whole catalog.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolRequestParams, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParams, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
};

use crate::client::Backend;

use super::tools::{self, ToolRegistry};

/// MCP server for one ZenTao instance.
///
/// Generic over `C: Backend` so tests can swap the HTTP client for a recorder.
/// Cloning is cheap: the client and registry are shared, which also means a
/// `zentao_login` call on one session applies to every session.
pub struct McpServer<C: Backend> {
    client: Arc<C>,
    registry: Arc<ToolRegistry>,
}

impl<C: Backend> Clone for McpServer<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<C: Backend> McpServer<C> {
    pub fn new(client: C, registry: ToolRegistry) -> Self {
        Self::shared(Arc::new(client), Arc::new(registry))
    }

    /// Build a server over a client and registry owned elsewhere.
    pub fn shared(client: Arc<C>, registry: Arc<ToolRegistry>) -> Self {
        Self { client, registry }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Run the named tool. Unknown names are an `invalid_params` error.
    pub async fn dispatch(
        &self,
        name: &str,
        args: &JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let spec = self
            .registry
            .get(name)
            .ok_or_else(|| McpError::invalid_params(format!("unknown tool: {name}"), None))?;
        tools::execute(spec, self.client.as_ref(), args).await
    }
}

impl<C: Backend + 'static> ServerHandler for McpServer<C> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::new(
                "zentao-mcp",
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(
                "ZenTao MCP Server - Products, projects, executions, stories, tasks, bugs, \
                 test cases, docs, kanban and more. Call zentao_login first if the server \
                 was started without application credentials.",
            )
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools: self.registry.tools(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        self.dispatch(&request.name, &args).await
    }
}
