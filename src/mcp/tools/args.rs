//! Argument marshalling: caller arguments -> outbound request.

use miette::Diagnostic;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Map, Value};
use thiserror::Error;
use url::form_urlencoded;

use super::spec::{ItemKind, Method, Param, ParamKind, Placement, placeholder};

/// Characters escaped in a path segment: the WHATWG path set plus `/` and `%`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Caller arguments that cannot be turned into a request.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("missing required parameter '{name}'")]
    #[diagnostic(code(zentao_mcp::args::missing))]
    Missing { name: String },

    #[error("parameter '{name}' must be {expected}")]
    #[diagnostic(code(zentao_mcp::args::wrong_type))]
    WrongType { name: String, expected: &'static str },

    #[error("parameter '{name}' must be one of: {allowed}")]
    #[diagnostic(code(zentao_mcp::args::not_allowed))]
    NotAllowed { name: String, allowed: String },

    #[error("parameter '{name}' does not fit in a signed 64-bit integer")]
    #[diagnostic(code(zentao_mcp::args::out_of_range))]
    OutOfRange { name: String },
}

impl ArgumentError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &str {
        match self {
            ArgumentError::Missing { name }
            | ArgumentError::WrongType { name, .. }
            | ArgumentError::NotAllowed { name, .. }
            | ArgumentError::OutOfRange { name } => name,
        }
    }
}

/// One fully-built backend request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    pub method: Method,
    pub path: String,
    /// `None` when no body field was supplied; always `None` for GET/DELETE.
    pub body: Option<Map<String, Value>>,
}

impl RequestEnvelope {
    pub fn build(
        method: Method,
        template: &str,
        params: &[Param],
        args: &Map<String, Value>,
    ) -> Result<Self, ArgumentError> {
        let mut path = template.to_string();
        let mut query = form_urlencoded::Serializer::new(String::new());
        let mut has_query = false;
        let mut body = Map::new();

        for param in params {
            let placement = param.placement(method, template);
            let Some(value) = present(args, param.name) else {
                if param.required || placement == Placement::Path {
                    return Err(ArgumentError::Missing {
                        name: param.name.to_string(),
                    });
                }
                continue;
            };

            let value = coerce(param, value)?;
            match placement {
                Placement::Path => {
                    let marker = placeholder(param.name);
                    let text = value.to_text(param);
                    let encoded: String = if in_query(template, &marker) {
                        form_urlencoded::byte_serialize(text.as_bytes()).collect()
                    } else {
                        utf8_percent_encode(&text, SEGMENT).to_string()
                    };
                    path = path.replace(&marker, &encoded);
                }
                Placement::Query => {
                    query.append_pair(param.name, &value.to_text(param));
                    has_query = true;
                }
                Placement::Body => {
                    body.insert(param.name.to_string(), value.into_json(param));
                }
            }
        }

        if has_query {
            path.push(if template.contains('?') { '&' } else { '?' });
            path.push_str(&query.finish());
        }

        let body = (method.carries_body() && !body.is_empty()).then_some(body);
        Ok(Self { method, path, body })
    }
}

/// Read a required text argument directly, for tools that issue no request.
pub fn required_text(args: &Map<String, Value>, name: &str) -> Result<String, ArgumentError> {
    match present(args, name) {
        None => Err(ArgumentError::Missing {
            name: name.to_string(),
        }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ArgumentError::WrongType {
            name: name.to_string(),
            expected: "a string",
        }),
    }
}

/// Legacy templates carry their identifiers in the query string.
fn in_query(template: &str, marker: &str) -> bool {
    template
        .find('?')
        .is_some_and(|q| template[q..].contains(marker))
}

/// Absent and explicit `null` are treated alike.
fn present<'a>(args: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    args.get(name).filter(|v| !v.is_null())
}

/// Argument after type checking and numeric narrowing.
#[derive(Debug, Clone, PartialEq)]
enum Coerced {
    Text(String),
    Number(i64),
    Flag(bool),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl Coerced {
    /// Rendering for the path or query string.
    fn to_text(&self, param: &Param) -> String {
        match self {
            Coerced::Text(s) => s.clone(),
            Coerced::Number(n) => n.to_string(),
            Coerced::Flag(b) => flag_text(*b, param.digits).to_string(),
            Coerced::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Coerced::Object(map) => Value::Object(map.clone()).to_string(),
        }
    }

    fn into_json(self, param: &Param) -> Value {
        match self {
            Coerced::Text(s) => Value::String(s),
            Coerced::Number(n) => Value::from(n),
            Coerced::Flag(b) if param.digits => Value::from(flag_text(b, true)),
            Coerced::Flag(b) => Value::Bool(b),
            Coerced::List(items) => Value::Array(items),
            Coerced::Object(map) => Value::Object(map),
        }
    }
}

fn flag_text(value: bool, digits: bool) -> &'static str {
    match (value, digits) {
        (true, true) => "1",
        (false, true) => "0",
        (true, false) => "true",
        (false, false) => "false",
    }
}

fn coerce(param: &Param, value: &Value) -> Result<Coerced, ArgumentError> {
    let wrong = |expected: &'static str| ArgumentError::WrongType {
        name: param.name.to_string(),
        expected,
    };

    match param.kind {
        ParamKind::Text => {
            let text = value.as_str().ok_or_else(|| wrong("a string"))?;
            check_allowed(param, text)?;
            Ok(Coerced::Text(text.to_string()))
        }
        ParamKind::Number => integer(param, value, "a number").map(Coerced::Number),
        ParamKind::Flag => value
            .as_bool()
            .map(Coerced::Flag)
            .ok_or_else(|| wrong("a boolean")),
        ParamKind::List(item) => {
            let items = value.as_array().ok_or_else(|| wrong("an array"))?;
            let mut coerced = Vec::with_capacity(items.len());
            for entry in items {
                let entry = match item {
                    ItemKind::Text => {
                        let text = entry.as_str().ok_or_else(|| wrong("an array of strings"))?;
                        check_allowed(param, text)?;
                        Value::from(text)
                    }
                    ItemKind::Number => {
                        integer(param, entry, "an array of numbers").map(Value::from)?
                    }
                    ItemKind::Object => {
                        if !entry.is_object() {
                            return Err(wrong("an array of objects"));
                        }
                        entry.clone()
                    }
                };
                coerced.push(entry);
            }
            Ok(Coerced::List(coerced))
        }
        ParamKind::Object => value
            .as_object()
            .cloned()
            .map(Coerced::Object)
            .ok_or_else(|| wrong("an object")),
    }
}

fn check_allowed(param: &Param, text: &str) -> Result<(), ArgumentError> {
    if param.allowed.is_empty() || param.allowed.contains(&text) {
        Ok(())
    } else {
        Err(ArgumentError::NotAllowed {
            name: param.name.to_string(),
            allowed: param.allowed.join(", "),
        })
    }
}

/// 2^63, the first float above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Narrow a JSON number to an integer, truncating toward zero.
///
/// Values outside `i64` are rejected rather than saturated, so an ID is
/// never silently replaced by a different one.
fn integer(param: &Param, value: &Value, expected: &'static str) -> Result<i64, ArgumentError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    let out_of_range = || ArgumentError::OutOfRange {
        name: param.name.to_string(),
    };
    if value.is_u64() {
        return Err(out_of_range());
    }
    let n = value.as_f64().ok_or_else(|| ArgumentError::WrongType {
        name: param.name.to_string(),
        expected,
    })?;
    let n = n.trunc();
    if n.is_finite() && (-I64_BOUND..I64_BOUND).contains(&n) {
        Ok(n as i64)
    } else {
        Err(out_of_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id() -> Param {
        Param::number("id", "ID")
    }

    #[test]
    fn test_integer_truncates_toward_zero() {
        assert_eq!(integer(&id(), &json!(7), "a number"), Ok(7));
        assert_eq!(integer(&id(), &json!(2.9), "a number"), Ok(2));
        assert_eq!(integer(&id(), &json!(-2.9), "a number"), Ok(-2));
        assert!(matches!(
            integer(&id(), &json!("7"), "a number"),
            Err(ArgumentError::WrongType { .. })
        ));
    }

    #[test]
    fn test_integer_keeps_the_extremes_of_i64() {
        assert_eq!(integer(&id(), &json!(i64::MAX), "a number"), Ok(i64::MAX));
        assert_eq!(integer(&id(), &json!(i64::MIN), "a number"), Ok(i64::MIN));
        assert_eq!(integer(&id(), &json!(-9.223372036854775808e18), "a number"), Ok(i64::MIN));
    }

    #[test]
    fn test_flag_text() {
        assert_eq!(flag_text(true, true), "1");
        assert_eq!(flag_text(false, true), "0");
        assert_eq!(flag_text(true, false), "true");
        assert_eq!(flag_text(false, false), "false");
    }
}
