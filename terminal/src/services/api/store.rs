//! # API Store
//!
//! The facade views and commands talk to. Every operation:
//!
//! 1. counts itself in flight,
//! 2. reads the current credential and builds one request,
//! 3. sends it through the [`Transport`],
//! 4. on failure records the error message as the store's last error,
//! 5. stops counting itself in flight, whatever happened.
//!
//! Results are returned per call; the shared state is only the in-flight
//! gauge and the last error message.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use shared::{ArticleQuery, CollectRequest, TemplateQuery, TemplateRequest, TextAnalysisRequest};
use uuid::Uuid;

use super::busy::BusyGauge;
use super::client::{ApiClient, ClientConfig};
use super::request::{build_request, to_params, Credentials, Endpoint};
use crate::core::error::ApiError;
use crate::core::service::{ArticleApi, Transport};
use crate::services::token_store::{TokenStore, AUTH_TOKEN_KEY};

pub struct ApiStore {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    busy: BusyGauge,
    last_error: RwLock<Option<String>>,
}

impl ApiStore {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            busy: BusyGauge::new(),
            last_error: RwLock::new(None),
        }
    }

    /// Store backed by an HTTP [`ApiClient`] built from `config`.
    pub fn with_config(
        config: ClientConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(ApiClient::new(config)?), tokens))
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.busy.in_flight()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    pub fn clear_error(&self) {
        *self.last_error.write() = None;
    }

    /// Credential for the next request, read fresh from the token store.
    ///
    /// A store that cannot be read is treated like an empty one.
    pub fn credentials(&self) -> Option<Credentials> {
        match self.tokens.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.and_then(Credentials::bearer),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token, sending unauthenticated");
                None
            }
        }
    }

    /// Send one request to `endpoint`.
    ///
    /// This is the single path every facade operation goes through. Pass
    /// `&Value::Null` for endpoints without parameters.
    #[tracing::instrument(
        name = "api_call",
        skip(self, params),
        fields(op = endpoint.name(), request_id = %Uuid::new_v4())
    )]
    pub async fn dispatch<P>(&self, endpoint: Endpoint, params: &P) -> Result<Value, ApiError>
    where
        P: Serialize + ?Sized + Sync,
    {
        let _busy = self.busy.enter();
        let start = Instant::now();

        let credentials = self.credentials();
        let request = to_params(params)
            .and_then(|params| build_request(&endpoint, params, credentials.as_ref()));
        let result = match request {
            Ok(request) => {
                tracing::debug!(
                    method = %request.method,
                    path = %request.path(),
                    authenticated = request.is_authenticated(),
                    "Dispatching request"
                );
                self.transport.execute(request).await
            }
            Err(e) => Err(e),
        };

        let duration_ms = start.elapsed().as_millis();
        match &result {
            Ok(_) => tracing::debug!(duration_ms, "Request succeeded"),
            Err(e) => {
                *self.last_error.write() = Some(e.message());
                tracing::warn!(error = %e, duration_ms, "Request failed");
            }
        }
        result
    }
}

#[async_trait]
impl ArticleApi for ApiStore {
    async fn collect_articles(&self, request: &CollectRequest) -> Result<Value, ApiError> {
        super::articles::collect_articles(self, request).await
    }

    async fn get_articles(&self, query: &ArticleQuery) -> Result<Value, ApiError> {
        super::articles::get_articles(self, query).await
    }

    async fn analyze_article(&self, article_id: &str) -> Result<Value, ApiError> {
        super::analysis::analyze_article(self, article_id).await
    }

    async fn analyze_text(&self, request: &TextAnalysisRequest) -> Result<Value, ApiError> {
        super::analysis::analyze_text(self, request).await
    }

    async fn generate_template(&self, request: &TemplateRequest) -> Result<Value, ApiError> {
        super::templates::generate_template(self, request).await
    }

    async fn get_templates(&self, query: &TemplateQuery) -> Result<Value, ApiError> {
        super::templates::get_templates(self, query).await
    }

    async fn get_dashboard_stats(&self) -> Result<Value, ApiError> {
        super::stats::get_dashboard_stats(self).await
    }

    async fn health(&self) -> Result<Value, ApiError> {
        super::stats::health(self).await
    }

    fn is_busy(&self) -> bool {
        ApiStore::is_busy(self)
    }

    fn last_error(&self) -> Option<String> {
        ApiStore::last_error(self)
    }
}
