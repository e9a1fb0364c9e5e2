//! # Request Building
//!
//! Turns an endpoint, its parameters and the caller's credentials into a
//! transport-independent [`ApiRequest`]. Credentials are an explicit argument;
//! nothing here reads global state.

use std::fmt;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::ApiError;

/// Backend operations, one per REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    CollectArticles,
    ListArticles,
    AnalyzeArticle(String),
    AnalyzeText,
    GenerateTemplate,
    ListTemplates,
    DashboardStats,
    Health,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListArticles
            | Endpoint::ListTemplates
            | Endpoint::DashboardStats
            | Endpoint::Health => Method::GET,
            Endpoint::CollectArticles
            | Endpoint::AnalyzeArticle(_)
            | Endpoint::AnalyzeText
            | Endpoint::GenerateTemplate => Method::POST,
        }
    }

    /// Path segments below the API base URL.
    pub fn segments(&self) -> Vec<String> {
        let parts: &[&str] = match self {
            Endpoint::CollectArticles => &["articles", "collect"],
            Endpoint::ListArticles => &["articles"],
            Endpoint::AnalyzeArticle(id) => {
                return vec!["articles".to_string(), id.clone(), "analyze".to_string()];
            }
            Endpoint::AnalyzeText => &["analyze", "text"],
            Endpoint::GenerateTemplate => &["templates", "generate"],
            Endpoint::ListTemplates => &["templates"],
            Endpoint::DashboardStats => &["stats", "dashboard"],
            Endpoint::Health => &["health"],
        };
        parts.iter().map(|s| s.to_string()).collect()
    }

    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::CollectArticles => "collect_articles",
            Endpoint::ListArticles => "get_articles",
            Endpoint::AnalyzeArticle(_) => "analyze_article",
            Endpoint::AnalyzeText => "analyze_text",
            Endpoint::GenerateTemplate => "generate_template",
            Endpoint::ListTemplates => "get_templates",
            Endpoint::DashboardStats => "get_dashboard_stats",
            Endpoint::Health => "health",
        }
    }
}

/// Bearer credential attached to outgoing requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap a token. Empty or whitespace-only tokens count as no credential.
    pub fn bearer(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value of the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"<redacted>").finish()
    }
}

/// A fully prepared backend request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Complete `Authorization` header value, when authenticated.
    pub authorization: Option<String>,
}

impl ApiRequest {
    /// Path relative to the base URL, e.g. `/articles/abc123/analyze`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn is_authenticated(&self) -> bool {
        self.authorization.is_some()
    }
}

/// Build the request for `endpoint`.
///
/// `params` goes to the query string for GET endpoints and to the JSON body
/// for POST endpoints. `Value::Null` means no parameters; a POST with
/// `Value::Null` has no body at all.
pub fn build_request(
    endpoint: &Endpoint,
    params: Value,
    credentials: Option<&Credentials>,
) -> Result<ApiRequest, ApiError> {
    let method = endpoint.method();
    let (query, body) = if method == Method::GET {
        (query_pairs(&params)?, None)
    } else if params.is_null() {
        (Vec::new(), None)
    } else {
        (Vec::new(), Some(params))
    };

    Ok(ApiRequest {
        method,
        segments: endpoint.segments(),
        query,
        body,
        authorization: credentials.map(Credentials::header_value),
    })
}

/// Serialize typed parameters into the untyped form [`build_request`] takes.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Value, ApiError> {
    serde_json::to_value(params).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Flatten a parameter object into query pairs.
///
/// Scalars become one pair, arrays repeat the key per element, `null`s are
/// dropped and nested objects are sent as JSON text.
pub fn query_pairs(params: &Value) -> Result<Vec<(String, String)>, ApiError> {
    let map = match params {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(ApiError::Encode(format!(
                "query parameters must be an object, got {}",
                other
            )))
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|v| !v.is_null()) {
                    pairs.push((key.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    Ok(pairs)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
