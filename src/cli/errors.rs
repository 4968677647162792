//! CLI-specific error types
//!
//! All CLI errors are fatal; main prints them and exits non-zero.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dataset could not be loaded or validated
    #[error("dataset error: {0}")]
    Dataset(#[from] CatalogError),

    /// Logger could not be initialized
    #[error("logger error: {0}")]
    Logger(String),

    /// Runtime or server failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
