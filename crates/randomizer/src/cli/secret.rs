//! Secret check command handler.

use randomizer::{Context, RandomizerConfig, RandomizerResult};

/// Resolve the configured secret once and report on it without printing it.
#[tracing::instrument(skip(config))]
pub async fn check_secret(config: &RandomizerConfig) -> RandomizerResult<()> {
    let provider = config.secret_provider()?;
    let ctx = Context::new().with_timeout(config.request_timeout());

    let secret = provider.provide(&ctx).await?;
    println!("Secret resolved ({} characters)", secret.chars().count());
    Ok(())
}
