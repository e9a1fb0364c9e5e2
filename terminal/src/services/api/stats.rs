//! # Dashboard and Health Endpoints

use serde_json::Value;

use super::request::Endpoint;
use super::store::ApiStore;
use crate::core::error::ApiError;

/// Aggregate dashboard numbers. `GET /stats/dashboard`.
pub async fn get_dashboard_stats(store: &ApiStore) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::DashboardStats, &Value::Null).await
}

/// Backend liveness. `GET /health`.
pub async fn health(store: &ApiStore) -> Result<Value, ApiError> {
    store.dispatch(Endpoint::Health, &Value::Null).await
}
