//! CLI module for huby
//!
//! Provides the command-line interface:
//! - serve: load the dataset and start the HTTP server
//! - check: one-shot dataset validation

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
