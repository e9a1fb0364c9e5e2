//! # API Client
//!
//! The configured HTTP transport shared by every API store call.
//!
//! - Base URL from `STUDIO_API_URL`, default `http://localhost:5000/api`
//! - Fixed 30 second timeout
//! - `Content-Type: application/json` on every request
//! - 2xx bodies are returned as parsed JSON; everything else is an [`ApiError`]
//!
//! No retry, backoff or cancellation: a failed or slow request is surfaced
//! as-is.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde_json::Value;

use super::request::ApiRequest;
use crate::core::error::ApiError;
use crate::core::service::Transport;

/// Default base URL for the backend API server.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "STUDIO_API_URL";

/// Request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// An unset or blank `STUDIO_API_URL` keeps the default.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// HTTP client for communicating with the backend API server.
///
/// Wraps a `reqwest::Client`, which pools connections and can be shared
/// across tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(config.base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `request`, with path segments percent-encoded.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }
        Ok(url)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Transport(format!("timeout of {}ms exceeded", self.timeout.as_millis()))
        } else {
            ApiError::Transport(format!("Network error: {}", err))
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(&request)?;
        let start = Instant::now();

        tracing::debug!(method = %request.method, url = %url, "Sending request");

        let mut builder = self.client.request(request.method.clone(), url.clone());
        if let Some(auth) = &request.authorization {
            builder = builder.header(AUTHORIZATION, auth);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = self.transport_error(e);
            tracing::error!(
                error = %err,
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                "API request failed"
            );
            err
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            let err = self.transport_error(e);
            tracing::error!(error = %err, url = %url, "Failed to read response body");
            err
        })?;
        let duration = start.elapsed();

        if !status.is_success() {
            let detail = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| shared::error_message(&body));
            let err = ApiError::Status {
                status: status.as_u16(),
                detail,
            };
            tracing::error!(
                status = status.as_u16(),
                detail = ?err.detail(),
                url = %url,
                duration_ms = duration.as_millis(),
                "API request failed"
            );
            return Err(err);
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        let body = serde_json::from_slice::<Value>(&bytes).map_err(|e| {
            tracing::error!(error = %e, url = %url, "Response parse error");
            ApiError::Decode(e.to_string())
        })?;

        tracing::debug!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::request::{build_request, Endpoint};

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        let request =
            build_request(&Endpoint::AnalyzeArticle("abc123".into()), Value::Null, None).unwrap();
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "http://localhost:5000/api/articles/abc123/analyze"
        );
    }

    #[test]
    fn test_url_trailing_slash_and_query() {
        let client =
            ApiClient::new(ClientConfig::default().with_base_url("http://example.test/api/"))
                .unwrap();
        let mut request = build_request(&Endpoint::ListArticles, Value::Null, None).unwrap();
        request.query = vec![
            ("limit".to_string(), "5".to_string()),
            ("search".to_string(), "理财 技巧".to_string()),
        ];
        assert_eq!(
            client.url_for(&request).unwrap().as_str(),
            "http://example.test/api/articles?limit=5&search=%E7%90%86%E8%B4%A2+%E6%8A%80%E5%B7%A7"
        );
    }

    #[test]
    fn test_article_id_is_one_segment() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        let request =
            build_request(&Endpoint::AnalyzeArticle("a/b c".into()), Value::Null, None).unwrap();
        assert_eq!(
            client.url_for(&request).unwrap().path(),
            "/api/articles/a%2Fb%20c/analyze"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new(ClientConfig::default().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
        let err = ApiClient::new(ClientConfig::default().with_base_url("mailto:x@y.z")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
