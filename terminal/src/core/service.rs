//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use serde_json::Value;
use shared::{ArticleQuery, CollectRequest, TemplateQuery, TemplateRequest, TextAnalysisRequest};

use super::error::ApiError;
use crate::services::api::ApiRequest;

/// Executes one prepared request against the backend.
///
/// Implementations return the response body on success; they never see or
/// touch the store's busy/error bookkeeping.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// One method per backend capability.
///
/// Every method returns the response body unmodified. Implementations track
/// requests in flight and the most recent failure message.
#[async_trait]
pub trait ArticleApi: Send + Sync {
    /// Queue a collection run.
    async fn collect_articles(&self, request: &CollectRequest) -> Result<Value, ApiError>;

    /// List collected articles; `{data, total}`.
    async fn get_articles(&self, query: &ArticleQuery) -> Result<Value, ApiError>;

    /// Analyze one stored article.
    async fn analyze_article(&self, article_id: &str) -> Result<Value, ApiError>;

    /// Analyze free text.
    async fn analyze_text(&self, request: &TextAnalysisRequest) -> Result<Value, ApiError>;

    /// Generate a writing template.
    async fn generate_template(&self, request: &TemplateRequest) -> Result<Value, ApiError>;

    /// List generated templates.
    async fn get_templates(&self, query: &TemplateQuery) -> Result<Value, ApiError>;

    /// Aggregate dashboard numbers.
    async fn get_dashboard_stats(&self) -> Result<Value, ApiError>;

    /// Backend liveness.
    async fn health(&self) -> Result<Value, ApiError>;

    /// `true` while at least one request is in flight.
    fn is_busy(&self) -> bool;

    /// Message of the most recently failed request.
    fn last_error(&self) -> Option<String>;
}
