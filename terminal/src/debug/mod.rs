//! # Logging Infrastructure
//!
//! Structured logging for the studio client, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studio_terminal::debug::{self, LogConfig};
//!
//! // Initialize at startup and keep the guard alive
//! let _guard = debug::init_logger(&LogConfig::from_env());
//!
//! tracing::info!(endpoint = "/articles", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `studio_terminal=debug,info`)
//! - `STUDIO_LOG_DIR`: Directory for the daily-rotated `studio.log`
//! - `STUDIO_LOG_JSON`: `1` for JSON log lines on stderr

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init as init_logger, LogGuard};
