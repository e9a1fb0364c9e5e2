//! # Common Error Types
//!
//! Consolidated error handling for the studio client.
//!
//! - [`ApiError`]: everything that can go wrong on one backend call. Its
//!   `Display` text is the message the API store records as its last error.
//! - [`AppError`]: application-level errors surfaced by the `studio` binary
//!   (API failures, configuration, token storage, output).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use studio_terminal::core::error::{ApiError, AppError};
//!
//! let err = ApiError::Transport("timeout".to_string());
//! assert_eq!(err.message(), "timeout");
//!
//! let app: AppError = err.into();
//! assert_eq!(app.to_string(), "timeout");
//! ```

use thiserror::Error;

use crate::services::token_store::TokenStoreError;

/// Failure of a single backend call.
///
/// No retry classification is attached; callers decide what to do with the
/// message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    ///
    /// `detail` carries the `message` field of an `{status: "error", message}`
    /// body when the backend sent one.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    /// A 2xx body that was not valid JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request parameters could not be turned into a query string or body.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// Base URL and path did not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The message recorded as the store's last error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied error message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Application-wide error type for the `studio` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed. Displayed as the bare API message.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid configuration (bad URL, unreadable environment).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command-line input rejected before any request was sent.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Reading or writing the persisted credentials failed.
    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),

    /// Local file access (e.g. `--content-file`).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a response for output failed.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
