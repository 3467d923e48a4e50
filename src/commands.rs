//! CLI command definitions
//!
//! Defines the clap commands for the smoke-test CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the smoke-test suite against the backend
    Run {
        /// Base URL of the backend under test (default: http://localhost:8000)
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds (default: 30)
        #[arg(long)]
        timeout: Option<u64>,

        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the scenarios in execution order
    Scenarios,
}
