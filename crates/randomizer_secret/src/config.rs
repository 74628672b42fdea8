//! Secret provider selection.

use crate::{CachedSecret, HttpSecretFetcher, SecretProvider, StaticSecret};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// TTL for cached remote secrets when none is configured.
///
/// Short enough that a rotated credential takes effect within a couple of
/// minutes, long enough to keep the lookup off most requests.
pub const DEFAULT_SECRET_TTL: Duration = Duration::from_secs(120);

/// Where the expected secret comes from.
///
/// # Example
///
/// ```toml
/// [secret]
/// source = "remote"
/// name = "slack-verification-token"
/// url = "https://secrets.internal/v1/values"
/// ttl_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SecretConfig {
    /// A fixed value
    Static {
        /// The secret itself
        value: String,
    },
    /// A cached remote lookup
    Remote(RemoteSecretConfig),
}

/// Settings for a cached remote secret.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct RemoteSecretConfig {
    /// Name of the secret in the remote source
    name: String,
    /// Base URL of the remote key-value service
    url: String,
    /// Bearer token for the remote service
    #[serde(default)]
    #[builder(default)]
    auth_token: Option<String>,
    /// Cache TTL override in seconds
    #[serde(default)]
    #[builder(default)]
    ttl_secs: Option<u64>,
}

impl RemoteSecretConfig {
    /// Effective cache TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SECRET_TTL)
    }
}

impl SecretConfig {
    /// Construct the configured provider.
    pub fn build(&self) -> Arc<dyn SecretProvider> {
        match self {
            SecretConfig::Static { value } => {
                tracing::info!("Using static secret");
                Arc::new(StaticSecret::new(value.clone()))
            }
            SecretConfig::Remote(remote) => {
                tracing::info!(name = %remote.name, ttl = ?remote.ttl(), "Using cached remote secret");
                let fetcher = HttpSecretFetcher::new(remote.url.clone(), remote.auth_token.clone());
                Arc::new(CachedSecret::new(remote.name.clone(), remote.ttl(), fetcher))
            }
        }
    }
}
