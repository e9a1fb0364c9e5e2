//! # Backend API Client Module
//!
//! HTTP client and facade for the article service backend.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient (reqwest transport) and ClientConfig
//! ├── request.rs    - Endpoint table and explicit request building
//! ├── busy.rs       - In-flight request gauge
//! ├── store.rs      - ApiStore facade (busy/error bookkeeping)
//! ├── articles.rs   - Collection and listing endpoints
//! ├── analysis.rs   - Article and free-text analysis endpoints
//! ├── templates.rs  - Template generation and listing endpoints
//! └── stats.rs      - Dashboard statistics and health endpoints
//! ```

pub mod analysis;
pub mod articles;
pub mod busy;
pub mod client;
pub mod request;
pub mod stats;
pub mod store;
pub mod templates;

pub use busy::{BusyGauge, BusyGuard};
pub use client::{ApiClient, ClientConfig, API_URL_ENV, DEFAULT_API_URL, REQUEST_TIMEOUT};
pub use request::{build_request, ApiRequest, Credentials, Endpoint};
pub use store::ApiStore;
