//! # Article Studio Client - Library Root
//!
//! Client for the article analysis service: collect trending articles,
//! browse them, run content analysis, and generate writing templates.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              studio-terminal (this crate)              │
//! ├────────────────────────────────────────────────────────┤
//! │  app          - clap CLI, command execution, rendering │
//! │  ApiStore     - busy gauge, last error, credentials    │
//! │  ApiClient    - reqwest transport (30s timeout)        │
//! │  TokenStore   - persisted auth token                   │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP + JSON
//!          ▼
//! ┌─────────────────────────────┐
//! │  Article service backend    │
//! │  (default localhost:5000)   │
//! └─────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Command-line interface
//!   - `commands`: Runs one command against an [`ArticleApi`]
//!   - `render`: JSON and table output
//!
//! - **core**: Error types and the service traits ([`Transport`], [`ArticleApi`])
//!
//! - **services**: External integrations
//!   - `api`: Request building, HTTP transport, and the [`ApiStore`] facade
//!   - `token_store`: Where the bearer token lives between runs
//!
//! - **debug**: `tracing` subscriber setup
//!
//! - **utils**: Input validation
//!
//! ## Core Concepts
//!
//! ### One Request Per Call
//!
//! Every store operation builds exactly one request and returns its own
//! `Result`. Overlapping calls never share a result slot.
//!
//! ### Shared Status
//!
//! The store exposes only two pieces of shared state:
//! - **Busy**: true while at least one call is in flight
//! - **Last error**: message of the most recent failure; successes leave it alone
//!
//! ### Credentials
//!
//! The auth token is read from the [`services::token_store::TokenStore`] for
//! every request and attached as `Authorization: Bearer <token>` when present.
//!
//! ## Usage
//!
//! ```bash
//! studio articles --limit 5 --table
//! studio analyze 6650f0c2a1b2
//! studio token set <token>
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p studio-terminal
//! ```
//!
//! HTTP behaviour is tested against a `mockito` server in `tests/`.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod utils;

pub use core::{ApiError, AppError, ArticleApi, Result, Transport};
pub use services::api::{ApiClient, ApiStore, ClientConfig};
