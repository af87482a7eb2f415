//! Declarative tool descriptors.
//!
//! Every ZenTao tool is one [`ToolSpec`]: a name, a description, one HTTP
//! verb with one path template, and the parameters it accepts. The generic
//! dispatcher in [`super::execute`] turns a spec plus caller arguments into
//! exactly one backend request.

use std::fmt;
use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether requests with this verb may carry a JSON body.
    pub fn carries_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// Element type of a list parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Text,
    Number,
    Object,
}

impl ItemKind {
    fn schema_type(self) -> &'static str {
        match self {
            ItemKind::Text => "string",
            ItemKind::Number => "number",
            ItemKind::Object => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    /// Arrives as a JSON number, sent as a base-10 integer.
    Number,
    Flag,
    List(ItemKind),
    Object,
}

impl ParamKind {
    pub(crate) fn schema_type(self) -> &'static str {
        match self {
            ParamKind::Text => "string",
            ParamKind::Number => "number",
            ParamKind::Flag => "boolean",
            ParamKind::List(_) => "array",
            ParamKind::Object => "object",
        }
    }
}

/// Where a parameter lands in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Substituted into a `{name}` placeholder of the path template.
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
    /// Closed set of literal values; empty means unconstrained. Applies to
    /// text parameters and to the items of text lists.
    pub allowed: &'static [&'static str],
    placement: Option<Placement>,
    /// Encode flags as `"1"`/`"0"` rather than booleans.
    pub digits: bool,
}

impl Param {
    fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            allowed: &[],
            placement: None,
            digits: false,
        }
    }

    pub fn text(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Text, description)
    }

    pub fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Number, description)
    }

    pub fn flag(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Flag, description)
    }

    pub fn list(name: &'static str, item: ItemKind, description: &'static str) -> Self {
        Self::new(name, ParamKind::List(item), description)
    }

    pub fn object(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Object, description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = values;
        self
    }

    /// Send in the query string even though the verb carries a body.
    pub fn in_query(mut self) -> Self {
        self.placement = Some(Placement::Query);
        self
    }

    pub fn digits(mut self) -> Self {
        self.digits = true;
        self
    }

    /// Resolve where this parameter goes for a request with `method` to `template`.
    pub fn placement(&self, method: Method, template: &str) -> Placement {
        if template.contains(&placeholder(self.name)) {
            Placement::Path
        } else if let Some(placement) = self.placement {
            placement
        } else if method.carries_body() {
            Placement::Body
        } else {
            Placement::Query
        }
    }

    fn schema(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".into(), self.kind.schema_type().into());
        schema.insert("description".into(), self.description.into());

        let allowed: Vec<Value> = self.allowed.iter().map(|v| Value::from(*v)).collect();
        match self.kind {
            ParamKind::List(item) => {
                let mut items = Map::new();
                items.insert("type".into(), item.schema_type().into());
                if !allowed.is_empty() {
                    items.insert("enum".into(), allowed.into());
                }
                schema.insert("items".into(), items.into());
            }
            _ if !allowed.is_empty() => {
                schema.insert("enum".into(), allowed.into());
            }
            _ => {}
        }

        schema.into()
    }
}

pub(crate) fn placeholder(name: &str) -> String {
    format!("{{{}}}", name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Http { method: Method, path: &'static str },
    /// Installs credentials on the shared client; issues no request.
    Credentials,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub target: Target,
    pub params: Vec<Param>,
}

impl ToolSpec {
    fn http(
        name: &'static str,
        method: Method,
        path: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            target: Target::Http { method, path },
            params: Vec::new(),
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::http(name, Method::Get, path, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::http(name, Method::Post, path, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::http(name, Method::Put, path, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::http(name, Method::Delete, path, description)
    }

    pub fn credentials(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            target: Target::Credentials,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    /// Human phrase used in failure messages: `create_bug` -> `create bug`.
    pub fn action(&self) -> String {
        self.name.replace('_', " ")
    }

    /// Path placeholders are always required, whatever the declaration says.
    pub fn is_required(&self, param: &Param) -> bool {
        match self.target {
            Target::Http { path, .. } => param.required || path.contains(&placeholder(param.name)),
            Target::Credentials => param.required,
        }
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for param in &self.params {
            properties.insert(param.name.to_string(), param.schema());
            if self.is_required(param) {
                required.push(Value::from(param.name));
            }
        }

        let mut schema = Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), properties.into());
        if !required.is_empty() {
            schema.insert("required".into(), required.into());
        }
        schema
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(self.input_schema()))
    }
}

/// `recTotal`/`recPerPage`/`pageID` paging used by legacy endpoints.
pub fn legacy_pager() -> [Param; 3] {
    [
        Param::number("recTotal", "Total record count from a previous page (optional)"),
        Param::number("recPerPage", "Records per page (optional)"),
        Param::number("pageID", "Page number, starting at 1 (optional)"),
    ]
}

/// `page`/`limit` paging used by REST endpoints.
pub fn rest_pager() -> [Param; 2] {
    [
        Param::number("page", "Page number, starting at 1 (optional)"),
        Param::number("limit", "Items per page (optional)"),
    ]
}

pub fn comment() -> Param {
    Param::text("comment", "Comment recorded with the action (optional)")
}
