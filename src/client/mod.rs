//! Outbound HTTP access to ZenTao.
//!
//! Tool handlers only see the [`Backend`] trait: four verbs taking a fully
//! formed path (query string included) and returning the raw response body.
//! [`ZentaoClient`] is the reqwest implementation; tests substitute an
//! in-memory recorder.

mod credentials;
mod error;
mod zentao;

#[cfg(test)]
mod credentials_test;

use std::future::Future;

use serde_json::{Map, Value};

pub use credentials::{Clock, CredentialStore, Credentials, SystemClock};
pub use error::{ClientError, ClientResult};
pub use zentao::ZentaoClient;

#[cfg(test)]
pub use credentials::MockClock;

/// JSON request body.
pub type Body = Map<String, Value>;

/// Contract between tool handlers and the ZenTao HTTP API.
///
/// `path` is absolute and may carry a query string, e.g.
/// `/index.php?m=execution&f=task&t=json&executionID=7` or `/products/1/bugs`.
pub trait Backend: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = ClientResult<Vec<u8>>> + Send;

    fn post(
        &self,
        path: &str,
        body: Option<&Body>,
    ) -> impl Future<Output = ClientResult<Vec<u8>>> + Send;

    fn put(
        &self,
        path: &str,
        body: Option<&Body>,
    ) -> impl Future<Output = ClientResult<Vec<u8>>> + Send;

    fn delete(&self, path: &str) -> impl Future<Output = ClientResult<Vec<u8>>> + Send;

    /// Install the credentials used by every subsequent request.
    fn set_credentials(&self, credentials: Credentials);
}
