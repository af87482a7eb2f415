//! MCP server exposing the ZenTao project-management API as tools.

pub mod app;
pub mod client;
pub mod config;
pub mod mcp;
