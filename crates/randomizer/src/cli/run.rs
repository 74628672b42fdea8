//! Command execution handlers.

use super::render::render;
use randomizer::{App, Context, MemoryStoreFactory, RandomizerConfig, StoreFactory};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}

/// Handle a single command against a fresh in-memory store.
#[tracing::instrument(skip(config, tokens), fields(tokens = tokens.len()))]
pub async fn run_once(config: &RandomizerConfig, tokens: &[String], as_json: bool) -> ExitCode {
    let factory = MemoryStoreFactory::new();
    let app = App::new(config.name().as_str(), factory.store_for("local"));

    let ctx = Context::new().with_timeout(config.request_timeout());
    if render(app.main(&ctx, tokens).await, as_json) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Handle commands from stdin until end of input or Ctrl-C.
///
/// Each line is one request with its own deadline. Saved groups persist for
/// the whole session.
#[tracing::instrument(skip(config))]
pub async fn run_shell(
    config: &RandomizerConfig,
    partition: &str,
    as_json: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let factory = MemoryStoreFactory::new();
    let app = App::new(config.name().as_str(), factory.store_for(partition));
    let session = Context::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    tracing::info!("Shell ready; end input with Ctrl-D");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                session.cancel();
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        let tokens = tokenize(&line);
        let ctx = session.with_timeout(config.request_timeout());
        render(app.main(&ctx, &tokens).await, as_json);
    }

    tracing::info!("Shell finished");
    Ok(ExitCode::SUCCESS)
}
