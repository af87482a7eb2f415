//! Model Context Protocol (MCP) server for ZenTao
//!
//! - **server**: [`McpServer`], the `ServerHandler` answering `tools/list` and `tools/call`
//! - **service**: Streamable HTTP wiring for axum
//! - **tools**: the declarative ZenTao tool catalog and its dispatcher

pub mod server;
mod service;
pub mod tools;

#[cfg(test)]
mod service_test;

pub use server::McpServer;
pub use service::create_mcp_service;
