//! Application credentials for ZenTao's code/key authentication.
//!
//! ZenTao authenticates third-party applications with a `code` and a
//! secret `key`. Each request carries `code`, a unix `time`, and
//! `token = md5(code + key + time)`; the key itself never leaves the process.

use std::fmt;
use std::sync::RwLock;

#[cfg(test)]
use mockall::automock;

/// Application code/key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub code: String,
    pub key: String,
}

impl Credentials {
    pub fn new(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
        }
    }

    /// Compute the query parameters that authenticate a request issued at `time`.
    pub fn sign(&self, time: i64) -> Vec<(&'static str, String)> {
        let digest = md5::compute(format!("{}{}{}", self.code, self.key, time));
        vec![
            ("code", self.code.clone()),
            ("time", time.to_string()),
            ("token", format!("{:x}", digest)),
        ]
    }
}

// Keep the key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("code", &self.code)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// Shared credential holder.
///
/// A single writer (the login tool) replaces the whole pair; every request
/// reads a snapshot. Readers never observe a code from one pair with the key
/// of another.
#[derive(Debug, Default)]
pub struct CredentialStore {
    inner: RwLock<Option<Credentials>>,
}

impl CredentialStore {
    pub fn new(initial: Option<Credentials>) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    pub fn set(&self, credentials: Credentials) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(credentials);
    }

    pub fn snapshot(&self) -> Option<Credentials> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Source of the unix timestamp used for request signing.
#[cfg_attr(test, automock)]
pub trait Clock: Send + Sync {
    /// Seconds since the unix epoch.
    fn now(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
