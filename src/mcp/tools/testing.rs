//! In-memory [`Backend`] that records requests instead of sending them.

use std::sync::Mutex;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, RawContent},
};
use serde_json::{Map, Value};

use super::{Method, ToolRegistry, execute};
use crate::client::{Backend, Body, ClientError, ClientResult, Credentials};

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub body: Option<Map<String, Value>>,
}

#[derive(Debug, Clone)]
enum Reply {
    Body(Vec<u8>),
    Status(u16, String),
}

#[derive(Debug)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    reply: Reply,
    credentials: Mutex<Option<Credentials>>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::replying(b"{}".to_vec())
    }
}

impl RecordingBackend {
    pub fn replying(body: impl Into<Vec<u8>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Reply::Body(body.into()),
            credentials: Mutex::new(None),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            reply: Reply::Status(status, body.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded call; panics unless exactly one was made.
    pub fn single_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.lock().unwrap().clone()
    }

    fn record(&self, method: Method, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, body) => Err(ClientError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

impl Backend for RecordingBackend {
    async fn get(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.record(Method::Get, path, None)
    }

    async fn post(&self, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        self.record(Method::Post, path, body)
    }

    async fn put(&self, path: &str, body: Option<&Body>) -> ClientResult<Vec<u8>> {
        self.record(Method::Put, path, body)
    }

    async fn delete(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.record(Method::Delete, path, None)
    }

    fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.lock().unwrap() = Some(credentials);
    }
}

pub fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Run `name` from the full catalog against `backend`.
pub async fn invoke(
    backend: &RecordingBackend,
    name: &str,
    value: Value,
) -> Result<CallToolResult, McpError> {
    let registry = ToolRegistry::zentao();
    let spec = registry
        .get(name)
        .unwrap_or_else(|| panic!("tool {name} is not registered"));
    execute(spec, backend, &args(value)).await
}

/// Run `name` and return the single request it produced.
pub async fn request_for(name: &str, value: Value) -> Call {
    let backend = RecordingBackend::default();
    invoke(&backend, name, value)
        .await
        .unwrap_or_else(|e| panic!("{name} rejected its arguments: {e:?}"));
    backend.single_call()
}

pub fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

pub fn body(value: Value) -> Option<Map<String, Value>> {
    Some(args(value))
}
