//! TTL cache around a remote secret lookup.

use crate::{SecretFetcher, SecretProvider};
use randomizer_core::Context;
use randomizer_error::RandomizerResult;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Stand-in expiry for TTLs too large to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Cached value and the instant it stops being valid.
#[derive(Default)]
struct CacheState {
    value: String,
    expiry: Option<Instant>,
}

impl CacheState {
    fn fresh_value(&self, now: Instant) -> Option<&str> {
        match self.expiry {
            Some(expiry) if now < expiry => Some(&self.value),
            _ => None,
        }
    }
}

/// Secret provider that caches a remote lookup for a fixed TTL.
///
/// Refreshes are single-flight: callers queue on one lock, and the first one
/// in after expiry performs the lookup while the rest wait and then read the
/// fresh value. A failed lookup leaves the previous state alone, so the next
/// caller simply tries again.
///
/// # Example
///
/// ```rust,no_run
/// use randomizer_core::Context;
/// use randomizer_secret::{CachedSecret, HttpSecretFetcher, SecretProvider};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpSecretFetcher::new("https://secrets.internal/v1/values", None);
/// let provider = CachedSecret::new("slack-token", Duration::from_secs(120), fetcher);
///
/// let secret = provider.provide(&Context::new()).await?;
/// # Ok(())
/// # }
/// ```
pub struct CachedSecret<F> {
    name: String,
    ttl: Duration,
    fetcher: F,
    state: Mutex<CacheState>,
}

impl<F: SecretFetcher> CachedSecret<F> {
    /// Create a provider for the secret `name`, cached for `ttl`.
    pub fn new(name: impl Into<String>, ttl: Duration, fetcher: F) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, ttl = ?ttl, "Creating cached secret provider");
        Self {
            name,
            ttl,
            fetcher,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Name of the secret being cached.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How long a fetched value stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// When the cached value expires, or `None` if no fetch has succeeded yet.
    ///
    /// Waits for any refresh in progress to finish first.
    pub async fn expiry(&self) -> Option<Instant> {
        self.state.lock().await.expiry
    }

    /// Expiry for a value fetched at `now`.
    ///
    /// A TTL that overflows the clock means the value never expires.
    fn expiry_from(&self, now: Instant) -> Instant {
        now.checked_add(self.ttl).unwrap_or_else(|| {
            tracing::warn!(ttl = ?self.ttl, "Secret TTL out of range; caching without expiry");
            now + FAR_FUTURE
        })
    }
}

#[async_trait::async_trait]
impl<F: SecretFetcher> SecretProvider for CachedSecret<F> {
    #[tracing::instrument(skip(self, ctx), fields(name = %self.name, cached = tracing::field::Empty))]
    async fn provide(&self, ctx: &Context) -> RandomizerResult<String> {
        let mut state = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                tracing::debug!("Cancelled before entering secret cache");
                return Err(ctx.error("waiting for secret cache").into());
            }
            guard = self.state.lock() => guard,
        };

        if let Some(value) = state.fresh_value(Instant::now()) {
            tracing::Span::current().record("cached", true);
            return Ok(value.to_string());
        }
        tracing::Span::current().record("cached", false);

        let value = ctx
            .run("fetching secret", self.fetcher.fetch(ctx, &self.name))
            .await?
            .inspect_err(|e| tracing::warn!(error = %e, "Secret fetch failed"))?;

        let expiry = self.expiry_from(Instant::now());
        state.value.clone_from(&value);
        state.expiry = Some(expiry);
        tracing::debug!(ttl = ?self.ttl, "Refreshed cached secret");
        Ok(value)
    }
}
