//! Randomizer CLI binary.
//!
//! This binary provides command-line access to the randomizer:
//! - Handle a single command
//! - Run an interactive session with saved groups
//! - Check the configured request secret

use clap::Parser;
use randomizer::{LoggingConfig, RandomizerConfig, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_secret, run_once, run_shell};

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut logging = LoggingConfig::new().with_json_logs(cli.json_logs);
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    init_logging(logging)?;

    let config = RandomizerConfig::load(cli.config.as_deref())?;
    tracing::debug!(name = %config.name(), timeout_ms = config.request_timeout_ms(), "Configuration loaded");

    let code = match cli.command {
        Commands::Run { json, tokens } => run_once(&config, &tokens, json).await,

        Commands::Shell { partition, json } => run_shell(&config, &partition, json).await?,

        Commands::Secret => match check_secret(&config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "Secret check failed");
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
    };

    Ok(code)
}
