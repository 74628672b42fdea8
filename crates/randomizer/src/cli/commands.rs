//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Randomizer - pick from lists of options, and save lists for later
#[derive(Parser, Debug)]
#[command(name = "randomizer")]
#[command(about = "Pick from lists of options, and save lists for later", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Handle a single command, e.g. `run /save lunch tacos pizza`
    Run {
        /// Print the outcome as JSON instead of the chat message
        #[arg(long)]
        json: bool,

        /// Command text, split on whitespace
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },

    /// Read commands from stdin, one per line, sharing saved groups
    Shell {
        /// Store partition the session works in
        #[arg(long, default_value = "local")]
        partition: String,

        /// Print outcomes as JSON instead of chat messages
        #[arg(long)]
        json: bool,
    },

    /// Resolve the configured request secret and report whether it works
    Secret,
}
