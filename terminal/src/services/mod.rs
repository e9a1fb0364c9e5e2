//! # Services Module
//!
//! External integrations of the studio client.
//!
//! ```text
//! services/
//! ├── api/            - Backend HTTP client and API store facade
//! └── token_store.rs  - Persisted `auth_token` credential
//! ```
//!
//! ## Request Flow
//!
//! ```text
//! caller ──> ApiStore ──(reads auth_token)──> TokenStore
//!               │
//!               │ build_request(endpoint, params, credentials)
//!               ▼
//!           ApiClient ──HTTP/JSON──> Backend (/api/articles, /api/templates, ...)
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns `Result<Value, ApiError>`:
//! - Network errors: `ApiError::Transport` with the underlying message
//! - Non-2xx responses: `ApiError::Status` ("Request failed with status code N")
//! - Malformed 2xx bodies: `ApiError::Decode`
//!
//! ## Thread Safety
//!
//! - **ApiClient**: wraps `reqwest::Client` (internally pooled, thread-safe)
//! - **ApiStore**: share behind `Arc`; overlapping calls are allowed and each
//!   gets its own result
//! - **TokenStore**: implementations are `Send + Sync`

pub mod api;
pub mod token_store;
