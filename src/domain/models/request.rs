//! Request descriptors, prefix routing, and normalized responses.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::{ToolsError, ToolsResult};
use crate::domain::models::{CredentialField, CredentialSet};

/// HTTP methods used by the remote services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which remote service a path belongs to, decided by its literal prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRoute {
    Tools,
    Manage,
}

impl ServiceRoute {
    pub const TOOLS_PREFIX: &'static str = "/toolsapi/";
    pub const MANAGE_PREFIX: &'static str = "/maximo/";

    /// Route for `path`, or `None` when it matches neither prefix.
    pub fn resolve(path: &str) -> Option<Self> {
        if path.starts_with(Self::TOOLS_PREFIX) {
            Some(Self::Tools)
        } else if path.starts_with(Self::MANAGE_PREFIX) {
            Some(Self::Manage)
        } else {
            None
        }
    }

    /// Credential field holding this service's base URL.
    pub const fn base_url_field(self) -> CredentialField {
        match self {
            Self::Tools => CredentialField::ToolsUrl,
            Self::Manage => CredentialField::ManageUrl,
        }
    }
}

/// One outbound call: built per action, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn route(&self) -> ToolsResult<ServiceRoute> {
        ServiceRoute::resolve(&self.path).ok_or_else(|| ToolsError::InvalidEndpoint(self.path.clone()))
    }

    /// Absolute URL for this request against the configured services.
    ///
    /// Exactly one trailing slash is stripped from the base URL. Query values
    /// are percent-encoded here and nowhere else.
    pub fn target_url(&self, credentials: &CredentialSet) -> ToolsResult<String> {
        let route = self.route()?;
        let base = credentials.value(route.base_url_field());
        let base = base.strip_suffix('/').unwrap_or(base);

        let mut url = format!("{base}{}", self.path);
        if !self.query.is_empty() {
            let encoded = self
                .query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push(if self.path.contains('?') { '&' } else { '?' });
            url.push_str(&encoded);
        }
        Ok(url)
    }
}

/// A successful response body: JSON when it parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "body", rename_all = "snake_case")]
pub enum ApiResponse {
    Json(Value),
    Text(String),
}

impl ApiResponse {
    pub fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            return Self::Text(body);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }

    /// True for bodies that carry nothing to show: blank text, `null`, `""`.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Json(Value::Null) => true,
            Self::Json(Value::String(text)) => text.is_empty(),
            Self::Json(_) => false,
        }
    }

    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Text for a document view: strings verbatim, JSON pretty-printed.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(text) | Self::Json(Value::String(text)) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}
