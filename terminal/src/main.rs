use anyhow::Result;
use clap::Parser;

use studio_terminal::app::{self, Cli};
use studio_terminal::debug::{self, LogConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    let _log_guard = debug::init_logger(&log_config);

    let output = app::run(cli).await?;
    println!("{}", output);

    Ok(())
}
