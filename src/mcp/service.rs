//! MCP Streamable HTTP service creation
//!
//! This module provides functions to create the MCP service
//! that can be integrated with an Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::client::Backend;

use super::server::McpServer;
use super::tools::ToolRegistry;

/// Create MCP Streamable HTTP service
///
/// Every session gets its own [`McpServer`], but all of them share one
/// client (and therefore one set of credentials) and one tool registry.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// use zentao_mcp::client::ZentaoClient;
/// use zentao_mcp::config::Config;
/// use zentao_mcp::mcp::{create_mcp_service, tools::ToolRegistry};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
///
/// let client = ZentaoClient::new(&Config::new()?)?;
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(client, ToolRegistry::zentao(), ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # Ok(())
/// # }
/// ```
pub fn create_mcp_service<C: Backend + 'static>(
    client: C,
    registry: ToolRegistry,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<C>, LocalSessionManager> {
    let client = Arc::new(client);
    let registry = Arc::new(registry);

    // rmcp expects the factory to return io::Error
    let service_factory = move || -> Result<McpServer<C>, std::io::Error> {
        Ok(McpServer::shared(Arc::clone(&client), Arc::clone(&registry)))
    };

    let config = StreamableHttpServerConfig::default()
        .with_sse_keep_alive(None)
        .with_sse_retry(None)
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
