use std::time::Duration;

use reqwest::{Client, Method, Response};
use tracing::{debug, warn};

use super::credentials::{Clock, CredentialStore, Credentials, SystemClock};
use super::error::{ClientError, ClientResult};
use super::{Backend, Body};
use crate::config::Config;

/// Paths with this prefix use the legacy `index.php?m=..&f=..&t=json` entry
/// point and are resolved against the base URL directly.
const LEGACY_ENTRY: &str = "/index.php";

/// Client for the ZenTao HTTP API
pub struct ZentaoClient {
    base_url: String,
    rest_prefix: String,
    client: Client,
    credentials: CredentialStore,
    clock: Box<dyn Clock>,
}

impl ZentaoClient {
    /// Create a client from configuration.
    ///
    /// Credentials are pre-installed when both code and key are configured;
    /// otherwise requests go out unsigned until `zentao_login` is called.
    pub fn new(config: &Config) -> ClientResult<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: &Config, clock: Box<dyn Clock>) -> ClientResult<Self> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("zentao-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Build {
                message: e.to_string(),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            rest_prefix: normalize_prefix(&config.rest_prefix),
            client,
            credentials: CredentialStore::new(config.credentials()),
            clock,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials currently attached to outgoing requests.
    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.snapshot()
    }

    /// Absolute URL for `path`, signed with the current credentials.
    pub fn url_for(&self, path: &str) -> String {
        let mut url = if path.starts_with(LEGACY_ENTRY) {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}{}", self.base_url, self.rest_prefix, path)
        };

        if let Some(credentials) = self.credentials.snapshot() {
            let auth = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(credentials.sign(self.clock.now()))
                .finish();
            url.push(if path.contains('?') { '&' } else { '?' });
            url.push_str(&auth);
        }

        url
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        debug!(%method, path, "sending ZenTao request");

        let mut request = self.client.request(method, self.url_for(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        Self::handle_response(request.send().await?).await
    }

    /// Return the raw body on 2xx, or a `ClientError::Status` carrying the
    /// response text otherwise.
    async fn handle_response(response: Response) -> ClientResult<Vec<u8>> {
        let status = response.status();
        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "ZenTao request failed");
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Backend for ZentaoClient {
    async fn get(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        self.send(Method::POST, path, body).await
    }

    async fn put(&self, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        self.send(Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.send(Method::DELETE, path, None).await
    }

    fn set_credentials(&self, credentials: Credentials) {
        debug!(code = %credentials.code, "installing ZenTao credentials");
        self.credentials.set(credentials);
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
