//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the studio client and the article
//! service backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{status, data, total}` response wrapper
//!   - **[`dto::article`]**: Article collection and listing
//!   - **[`dto::analysis`]**: Article / free-text analysis reports
//!   - **[`dto::template`]**: Writing template generation
//!   - **[`dto::stats`]**: Dashboard statistics and health
//! - **[`utils`]**: Keyword and timestamp helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Optional request fields are omitted when `None`
//! - Response types are tolerant: unknown fields are ignored and missing
//!   fields fall back to their defaults, since the backend performs no
//!   schema guarantees
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{ArticleQuery, Envelope, Article};
//! use serde_json::json;
//!
//! let query = ArticleQuery { limit: Some(5), ..Default::default() };
//! assert_eq!(query.limit, Some(5));
//!
//! let body = json!({"status": "success", "data": [], "total": 0});
//! let envelope: Envelope<Vec<Article>> = Envelope::from_value(body).unwrap();
//! assert_eq!(envelope.total, Some(0));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
