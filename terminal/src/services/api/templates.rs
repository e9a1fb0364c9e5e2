//! # Template Endpoints

use serde_json::Value;
use shared::{TemplateQuery, TemplateRequest};

use super::request::Endpoint;
use super::store::ApiStore;
use crate::core::error::ApiError;

/// Generate a writing template. `POST /templates/generate`.
#[tracing::instrument(skip(store, request), fields(kind = %request.kind, audience = %request.audience))]
pub async fn generate_template(
    store: &ApiStore,
    request: &TemplateRequest,
) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::GenerateTemplate, request).await
}

/// List generated templates, newest first. `GET /templates`.
pub async fn get_templates(store: &ApiStore, query: &TemplateQuery) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::ListTemplates, query).await
}
