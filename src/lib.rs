pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::cli::OutputFormat;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Commands that run against the configured feed and store.
#[derive(Debug, Clone, Copy)]
pub enum AppCommand {
    Ingest,
    Report { format: OutputFormat },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("ratewatch starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let store = store::open(&config)?;

    match command {
        AppCommand::Ingest => {
            let feed = providers::EcbFeedProvider::new(&config.feed.url)?;
            cli::ingest::run(&feed, &store).await
        }
        AppCommand::Report { format } => cli::report::run(&store, format).await,
    }
}
