//! # Analysis Endpoints

use serde_json::Value;
use shared::TextAnalysisRequest;

use super::request::Endpoint;
use super::store::ApiStore;
use crate::core::error::ApiError;

/// Analyze a stored article. `POST /articles/{id}/analyze`, no body.
///
/// The id is sent as a single path segment exactly as given.
#[tracing::instrument(skip(store))]
pub async fn analyze_article(store: &ApiStore, article_id: &str) -> Result<Value, ApiError> {
    store
        .dispatch(Endpoint::AnalyzeArticle(article_id.to_string()), &Value::Null)
        .await
}

/// Analyze free text. `POST /analyze/text`.
pub async fn analyze_text(
    store: &ApiStore,
    request: &TextAnalysisRequest,
) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::AnalyzeText, request).await
}

/// Analyze an arbitrary JSON payload. `POST /analyze/text`.
///
/// For callers that need to send fields beyond `title` and `content`.
pub async fn analyze_payload(store: &ApiStore, payload: Value) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::AnalyzeText, &payload).await
}
