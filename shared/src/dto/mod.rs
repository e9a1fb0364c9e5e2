//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the article service over its REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Generic response wrapper returned by every endpoint
//! - [`article`] - Collection form, listing query and article records
//! - [`analysis`] - Analysis payloads and reports
//! - [`template`] - Template generation requests and results
//! - [`stats`] - Dashboard aggregates and health check
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/articles?limit=5&category=tech
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": "success",
//!   "data": [ { "id": "9b1c...", "title": "...", "read_count": 120000 } ],
//!   "total": 42,
//!   "limit": 5,
//!   "offset": 0
//! }
//! ```

pub mod analysis;
pub mod article;
pub mod envelope;
pub mod stats;
pub mod template;

pub use analysis::*;
pub use article::*;
pub use envelope::*;
pub use stats::*;
pub use template::*;
