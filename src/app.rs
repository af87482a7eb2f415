//! Process wiring: tracing, client construction and the chosen transport.

use std::net::SocketAddr;

use axum::Router;
use miette::Diagnostic;
use rmcp::{ServiceExt, transport::stdio};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::{ClientError, ZentaoClient};
use crate::config::{Config, ConfigError, Transport};
use crate::mcp::{McpServer, create_mcp_service, tools::ToolRegistry};

#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(zentao_mcp::app::config))]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    #[diagnostic(code(zentao_mcp::app::client))]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(zentao_mcp::app::io))]
    Io(#[from] std::io::Error),

    #[error("MCP server error: {0}")]
    #[diagnostic(code(zentao_mcp::app::server))]
    Server(String),
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr: on the stdio transport stdout carries the protocol.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zentao_mcp=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Serve the ZenTao catalog over the configured transport until shutdown.
pub async fn run(config: Config) -> Result<(), AppError> {
    let client = ZentaoClient::new(&config)?;
    let registry = ToolRegistry::zentao();
    info!(
        base_url = client.base_url(),
        tools = registry.len(),
        transport = %config.transport,
        signed = client.credentials().is_some(),
        "Starting ZenTao MCP server"
    );

    match config.transport {
        Transport::Stdio => serve_stdio(client, registry).await,
        Transport::Http => serve_http(&config, client, registry).await,
    }
}

async fn serve_stdio(client: ZentaoClient, registry: ToolRegistry) -> Result<(), AppError> {
    let service = McpServer::new(client, registry)
        .serve(stdio())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;
    info!(?reason, "MCP session ended");
    Ok(())
}

async fn serve_http(
    config: &Config,
    client: ZentaoClient,
    registry: ToolRegistry,
) -> Result<(), AppError> {
    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(client, registry, ct.clone());

    let app = Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutting down");
            }
            ct.cancel();
        })
        .await?;

    Ok(())
}
