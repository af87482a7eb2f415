//! ZenTao MCP server binary.
//!
//! Reads `ZENTAO_*` environment variables, applies command-line overrides
//! and hands the resulting configuration to [`app::run`].

use std::net::IpAddr;

use clap::Parser;
use zentao_mcp::app::{self, AppError};
use zentao_mcp::config::{Config, Transport};

#[derive(Parser)]
#[command(name = "zentao-mcp")]
#[command(author, version, about = "MCP server for the ZenTao project-management API", long_about = None)]
struct Cli {
    /// ZenTao root URL [env: ZENTAO_URL]
    #[arg(long)]
    url: Option<String>,

    /// Prefix for REST paths [env: ZENTAO_REST_PREFIX]
    #[arg(long)]
    rest_prefix: Option<String>,

    /// Application code [env: ZENTAO_CODE]
    #[arg(long)]
    code: Option<String>,

    /// Application key [env: ZENTAO_KEY]
    #[arg(long)]
    key: Option<String>,

    /// Per-request timeout in seconds [env: ZENTAO_TIMEOUT_SECS]
    #[arg(long)]
    timeout: Option<u64>,

    /// Transport to serve MCP over
    #[arg(short, long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    port: u16,
}

impl Cli {
    fn into_config(self) -> Result<Config, AppError> {
        let mut config = Config::new()?
            .with_transport(self.transport)
            .with_host(self.host)
            .with_port(self.port);

        if let Some(url) = self.url {
            config = config.with_base_url(url);
        }
        if let Some(prefix) = self.rest_prefix {
            config = config.with_rest_prefix(prefix);
        }
        if let Some(code) = self.code {
            config = config.with_code(code);
        }
        if let Some(key) = self.key {
            config = config.with_key(key);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    app::init_tracing();

    let config = Cli::parse().into_config()?;
    app::run(config).await?;

    Ok(())
}
