//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Error types (`ApiError`, `AppError`, `Result<T>`)
//! - **[`service`]**: Service traits (`Transport`, `ArticleApi`)
//!
//! ## Dependency Injection
//!
//! The API store talks to the network only through [`Transport`], and callers
//! can depend on [`ArticleApi`] instead of the concrete store:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use studio_terminal::core::ArticleApi;
//! use studio_terminal::services::api::{ApiClient, ApiStore, ClientConfig};
//! use studio_terminal::services::token_store::MemoryTokenStore;
//!
//! let transport = Arc::new(ApiClient::new(ClientConfig::default()).unwrap());
//! let api: Arc<dyn ArticleApi> =
//!     Arc::new(ApiStore::new(transport, Arc::new(MemoryTokenStore::new())));
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::{ArticleApi, Transport};
