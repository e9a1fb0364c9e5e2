//! # Application Orchestrator
//!
//! Command-line front end for the article service. Parses arguments, wires
//! the token store and API store together, runs one command and returns its
//! output text.
//!
//! ```text
//! studio [--api-url URL] [--token-file PATH] [--table] [-v] <command>
//!
//!   collect        Queue a collection run
//!   articles       List collected articles
//!   analyze ID     Analyze a stored article
//!   analyze-text   Analyze a title and/or content
//!   template       Generate a writing template
//!   templates      List generated templates
//!   stats          Dashboard statistics
//!   health         Backend health check
//!   token          Manage the stored auth token
//! ```
//!
//! ## Key Components
//!
//! - **[`Cli`]** / **[`Command`]**: `clap` argument model
//! - **[`commands`]**: Runs a [`Command`] against any [`ArticleApi`]
//! - **[`render`]**: JSON and table output

pub mod commands;
pub mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use shared::{DEFAULT_COLLECT_KEYWORDS, DEFAULT_MIN_READS};

use crate::core::error::{AppError, Result};
use crate::core::ArticleApi;
use crate::services::api::{ApiStore, ClientConfig};
use crate::services::token_store::{FileTokenStore, TokenStore};

pub use render::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "studio",
    version,
    about = "Collect, analyze and template articles through the article service API"
)]
pub struct Cli {
    /// Backend API base URL
    #[arg(long, env = "STUDIO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Credentials file holding the auth token
    #[arg(long, env = "STUDIO_TOKEN_FILE", global = true)]
    pub token_file: Option<PathBuf>,

    /// Render results as text tables instead of JSON
    #[arg(long, global = true)]
    pub table: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Queue a collection run
    Collect {
        #[arg(long, default_value = "all")]
        category: String,
        /// Minimum read count
        #[arg(long, default_value_t = DEFAULT_MIN_READS)]
        min_reads: u64,
        /// Comma-separated keywords
        #[arg(long, default_value = DEFAULT_COLLECT_KEYWORDS)]
        keywords: String,
    },

    /// List collected articles
    Articles {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long, conflicts_with = "page")]
        offset: Option<u32>,
        /// 1-based page; page size is --limit (default 20)
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },

    /// Analyze a stored article
    Analyze {
        /// Article id
        id: String,
    },

    /// Analyze a title and/or content
    AnalyzeText {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the content from a file
        #[arg(long)]
        content_file: Option<PathBuf>,
    },

    /// Generate a writing template
    Template {
        /// Template family: listicle or howto
        #[arg(long = "type", default_value = "listicle")]
        kind: String,
        #[arg(long, default_value = "professional")]
        audience: String,
        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        keywords: String,
        #[arg(long)]
        user_id: Option<String>,
    },

    /// List generated templates
    Templates {
        #[arg(long)]
        user_id: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Dashboard statistics
    Stats,

    /// Backend health check
    Health,

    /// Manage the stored auth token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum TokenAction {
    /// Store a bearer token
    Set { token: String },
    /// Remove the stored token
    Clear,
    /// Show whether a token is stored
    Show,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::from_env();
        match &self.api_url {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
            _ => config,
        }
    }

    pub fn token_store(&self) -> Result<FileTokenStore> {
        match &self.token_file {
            Some(path) => Ok(FileTokenStore::new(path)),
            None => Ok(FileTokenStore::from_env()?),
        }
    }
}

/// Run the parsed command line and return what should go to stdout.
pub async fn run(cli: Cli) -> Result<String> {
    let format = cli.output_format();
    let tokens: Arc<dyn TokenStore> = Arc::new(cli.token_store()?);
    let config = cli.client_config();

    tracing::debug!(base_url = %config.base_url, command = ?cli.command, "Starting");

    let store = ApiStore::with_config(config, tokens.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let api: &dyn ArticleApi = &store;

    commands::execute(api, tokens.as_ref(), cli.command, format).await
}
