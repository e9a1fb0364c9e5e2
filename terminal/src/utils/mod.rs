//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Command-line input checks run before any request is sent
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Keyword lists and timestamp formatting
//! - [`crate::app`]: Commands that call these checks

pub mod validation;
