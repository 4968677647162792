//! CLI argument definitions using clap
//!
//! Commands:
//! - huby serve --config <path>
//! - huby check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// huby - A coworking space directory server
#[derive(Parser, Debug)]
#[command(name = "huby")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the directory server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./huby.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Override the configured dataset path
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Validate the dataset and print a summary
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./huby.json")]
        config: PathBuf,

        /// Override the configured dataset path
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
