//! Layered configuration loading.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use randomizer_error::{ConfigError, RandomizerError, RandomizerResult};
use randomizer_secret::{SecretConfig, SecretProvider};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../randomizer.toml");

/// Top-level randomizer configuration.
///
/// Loads from TOML with a precedence system:
/// 1. Bundled defaults (randomizer.toml shipped with the crate)
/// 2. `~/.config/randomizer/randomizer.toml`
/// 3. `./randomizer.toml`
/// 4. An explicitly given file
/// 5. `RANDOMIZER__*` environment variables
///
/// # Example
///
/// ```no_run
/// use randomizer::RandomizerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = RandomizerConfig::load(None)?;
/// println!("Invoked as {}", config.name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct RandomizerConfig {
    /// Command name shown in help text
    #[serde(default = "default_name")]
    name: String,

    /// Deadline for handling a single request, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    request_timeout_ms: u64,

    /// Where the expected request secret comes from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    secret: Option<SecretConfig>,
}

fn default_name() -> String {
    "/randomize".to_string()
}

fn default_request_timeout_ms() -> u64 {
    1500
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            request_timeout_ms: default_request_timeout_ms(),
            secret: None,
        }
    }
}

fn config_error(context: &str) -> impl FnOnce(config::ConfigError) -> RandomizerError + '_ {
    move |e| RandomizerError::from(ConfigError::new(format!("{}: {}", context, e)))
}

impl RandomizerConfig {
    /// Load configuration from a single file, without defaults or environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> RandomizerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(config_error("Failed to read configuration"))?
            .try_deserialize()
            .map_err(config_error("Failed to parse configuration"))
    }

    /// Load configuration from every source, in precedence order.
    ///
    /// User config files are optional and silently skipped if missing. An
    /// `explicit` file must exist.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> RandomizerResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/randomizer/randomizer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("randomizer").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("RANDOMIZER")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .map_err(config_error("Failed to build configuration"))?
            .try_deserialize()
            .map_err(config_error("Failed to parse configuration"))
    }

    /// Per-request deadline.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Build the configured secret provider.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no secret source is configured.
    pub fn secret_provider(&self) -> RandomizerResult<Arc<dyn SecretProvider>> {
        self.secret.as_ref().map(SecretConfig::build).ok_or_else(|| {
            ConfigError::new("no [secret] configured; set a static value or a remote source").into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_parse() {
        let config: RandomizerConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config, RandomizerConfig::default());
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let err = match RandomizerConfig::default().secret_provider() {
            Err(err) => err,
            Ok(_) => panic!("expected an error"),
        };
        assert!(matches!(
            err.kind(),
            randomizer_error::RandomizerErrorKind::Config(_)
        ));
    }
}
