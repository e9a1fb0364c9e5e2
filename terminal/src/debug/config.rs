//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "studio_terminal=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "studio_terminal=debug,info")
    pub log_level: String,
    /// Directory for the rotated log file; file logging is off when `None`
    pub log_dir: Option<PathBuf>,
    /// Emit JSON lines instead of human-readable text on stderr
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
            json: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `STUDIO_LOG_DIR`: enables the daily-rotated `studio.log` in that directory
    /// - `STUDIO_LOG_JSON`: `1` for JSON output on stderr
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            log_dir: std::env::var_os("STUDIO_LOG_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            json: std::env::var("STUDIO_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Debug output for this crate, warnings for dependencies (CLI `--verbose`).
    pub fn verbose(mut self) -> Self {
        self.log_level = "studio_terminal=debug,warn".to_string();
        self
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
