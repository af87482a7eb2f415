//! Runtime configuration.
//!
//! Precedence: CLI flag > environment variable > default. [`Config::new`]
//! reads the environment; the binary then applies CLI overrides through the
//! `with_*` builders.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

use crate::client::Credentials;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
pub const DEFAULT_REST_PREFIX: &str = "/api.php/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown transport '{0}'")]
    #[diagnostic(
        code(zentao_mcp::config::transport),
        help("Use 'stdio' or 'http'.")
    )]
    UnknownTransport(String),

    #[error("invalid value '{value}' for {name}")]
    #[diagnostic(code(zentao_mcp::config::invalid_value))]
    InvalidValue { name: &'static str, value: String },
}

/// How the MCP server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    #[default]
    Stdio,
    /// Streamable HTTP mounted at /mcp
    Http,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http => write!(f, "http"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// ZenTao root URL, e.g. `https://zentao.example.com`
    pub base_url: String,
    /// Prefix for REST-style paths, relative to `base_url`
    pub rest_prefix: String,
    /// Application code
    pub code: Option<String>,
    /// Application key
    pub key: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
    pub transport: Transport,
    /// Bind address for the http transport
    pub host: IpAddr,
    /// Port for the http transport
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            rest_prefix: DEFAULT_REST_PREFIX.to_string(),
            code: None,
            key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            transport: Transport::default(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Defaults overlaid with `ZENTAO_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = read_env("ZENTAO_URL") {
            config.base_url = url;
        }
        if let Ok(prefix) = env::var("ZENTAO_REST_PREFIX") {
            // An empty prefix is meaningful: REST paths at the server root.
            config.rest_prefix = prefix;
        }
        config.code = read_env("ZENTAO_CODE");
        config.key = read_env("ZENTAO_KEY");
        if let Some(raw) = read_env("ZENTAO_TIMEOUT_SECS") {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "ZENTAO_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_rest_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.rest_prefix = prefix.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Startup credentials, present only when both halves are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.code, &self.key) {
            (Some(code), Some(key)) => Some(Credentials::new(code, key)),
            _ => None,
        }
    }
}

fn read_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
