use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("failed to connect to ZenTao: {source}")]
    #[diagnostic(
        code(zentao_mcp::client::connection_failed),
        help("Is ZENTAO_URL pointing at a reachable ZenTao instance?")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("ZenTao returned HTTP {status}: {body}")]
    #[diagnostic(code(zentao_mcp::client::status))]
    Status { status: u16, body: String },

    #[error("request to ZenTao failed: {message}")]
    #[diagnostic(code(zentao_mcp::client::request))]
    Request { message: String },

    #[error("could not build HTTP client: {message}")]
    #[diagnostic(
        code(zentao_mcp::client::build),
        help("Check the TLS setup and the configured timeout.")
    )]
    Build { message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ConnectionFailed { source: e }
        } else {
            ClientError::Request {
                message: e.to_string(),
            }
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
