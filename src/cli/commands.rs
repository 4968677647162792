//! CLI command implementations
//!
//! `serve` boots the full stack: logger, config, dataset, HTTP server.
//! `check` loads and validates the dataset, prints a summary, and exits.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::http::HttpServer;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the matching command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port, data } => serve(&config, port, data),
        Command::Check { config, data } => check(&config, data),
    }
}

/// Start the directory server
fn serve(config_path: &Path, port: Option<u16>, data: Option<PathBuf>) -> CliResult<()> {
    init_logger()?;

    let config = load_config(config_path, port, data)?;

    // Startup-time hard failure: a dataset that does not load means the
    // process cannot serve
    let catalog = Catalog::load(&config.data)?;
    tracing::info!(
        spaces = catalog.len(),
        dataset = %config.data.display(),
        "dataset loaded"
    );

    let server = HttpServer::with_config(config.http, Arc::new(catalog));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Validate the dataset and print a summary
fn check(config_path: &Path, data: Option<PathBuf>) -> CliResult<()> {
    let config = load_config(config_path, None, data)?;
    let catalog = Catalog::load(&config.data)?;

    println!(
        "dataset ok: {} spaces, {} cities, {} amenities",
        catalog.len(),
        catalog.cities().len(),
        catalog.amenities().len()
    );

    Ok(())
}

/// Load the config file and apply CLI overrides
fn load_config(path: &Path, port: Option<u16>, data: Option<PathBuf>) -> CliResult<AppConfig> {
    let mut config = AppConfig::load_or_default(path)?;

    if let Some(port) = port {
        config.http.port = port;
    }
    if let Some(data) = data {
        config.data = data;
    }

    Ok(config)
}

fn init_logger() -> CliResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()
        .map_err(|e| super::errors::CliError::Logger(e.to_string()))
}
