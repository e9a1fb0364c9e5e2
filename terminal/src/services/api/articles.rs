//! # Article Endpoints
//!
//! Collection runs and article listing.

use serde_json::Value;
use shared::{ArticleQuery, CollectRequest};

use super::request::Endpoint;
use super::store::ApiStore;
use crate::core::error::ApiError;

/// Queue a collection run. `POST /articles/collect`.
///
/// The backend answers as soon as the task is queued; the body carries the
/// `task_id`.
#[tracing::instrument(skip(store, request), fields(category = %request.category, min_reads = request.min_reads))]
pub async fn collect_articles(
    store: &ApiStore,
    request: &CollectRequest,
) -> Result<Value, ApiError> {
    tracing::info!(keywords = %request.keywords, "Submitting collection task");
    store.dispatch(Endpoint::CollectArticles, request).await
}

/// List collected articles, newest first. `GET /articles`.
pub async fn get_articles(store: &ApiStore, query: &ArticleQuery) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::ListArticles, query).await
}
