//! Secret provider traits and the static provider.

use randomizer_core::Context;
use randomizer_error::RandomizerResult;

/// Supplies the secret inbound requests are expected to carry.
#[async_trait::async_trait]
pub trait SecretProvider: Send + Sync {
    /// The current expected secret.
    async fn provide(&self, ctx: &Context) -> RandomizerResult<String>;
}

/// Looks up a named secret from a remote source.
///
/// Implementations are called at most once per cache refresh by
/// [`CachedSecret`](crate::CachedSecret).
#[async_trait::async_trait]
pub trait SecretFetcher: Send + Sync {
    /// Fetch the current value of `name`.
    async fn fetch(&self, ctx: &Context, name: &str) -> RandomizerResult<String>;
}

/// A fixed secret.
///
/// # Examples
///
/// ```
/// use randomizer_core::Context;
/// use randomizer_secret::{SecretProvider, StaticSecret};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StaticSecret::new("s3cr3t");
/// assert_eq!(provider.provide(&Context::new()).await?, "s3cr3t");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StaticSecret {
    value: String,
}

impl StaticSecret {
    /// Create a provider that always returns `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for StaticSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSecret")
            .field("value", &"<redacted>")
            .finish()
    }
}

#[async_trait::async_trait]
impl SecretProvider for StaticSecret {
    async fn provide(&self, ctx: &Context) -> RandomizerResult<String> {
        ctx.check("providing static secret")?;
        Ok(self.value.clone())
    }
}
