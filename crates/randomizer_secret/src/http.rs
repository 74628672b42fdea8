//! Remote key-value secret lookup over HTTP.

use crate::SecretFetcher;
use randomizer_core::Context;
use randomizer_error::{RandomizerResult, SecretError, SecretErrorKind};
use tracing::instrument;

/// Fetches secrets with `GET {base_url}/{name}`.
///
/// The name is sent as a single percent-encoded path segment, so a
/// hierarchical name like `/prod/slack/token` reaches the service intact.
///
/// The response body, trimmed, is the secret value. The source is expected to
/// return the value already decrypted.
#[derive(Clone)]
pub struct HttpSecretFetcher {
    base_url: String,
    auth_token: Option<String>,
    client: reqwest::Client,
}

impl HttpSecretFetcher {
    /// Create a fetcher for the key-value service at `base_url`.
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "Creating HTTP secret fetcher");
        Self {
            base_url,
            auth_token,
            client: reqwest::Client::new(),
        }
    }

    /// Base URL of the key-value service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` with `name` appended as one percent-encoded path segment.
    fn url_for(&self, name: &str) -> Result<reqwest::Url, SecretError> {
        let invalid = |reason: String| {
            SecretError::new(SecretErrorKind::Fetch(format!(
                "invalid secret URL {:?}: {}",
                self.base_url, reason
            )))
        };

        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("base URL cannot have a path".to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }
}

impl std::fmt::Debug for HttpSecretFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSecretFetcher")
            .field("base_url", &self.base_url)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[async_trait::async_trait]
impl SecretFetcher for HttpSecretFetcher {
    #[instrument(skip(self, ctx), fields(base_url = %self.base_url))]
    async fn fetch(&self, ctx: &Context, name: &str) -> RandomizerResult<String> {
        let mut req = self.client.get(self.url_for(name)?);
        if let Some(token) = &self.auth_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = ctx
            .run("requesting secret", req.send())
            .await?
            .map_err(|e| {
                tracing::error!("Secret request failed: {}", e);
                SecretError::new(SecretErrorKind::Fetch(e.to_string()))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Secret source returned error: {}", status);
            return Err(SecretError::new(SecretErrorKind::Status(status.as_u16())).into());
        }

        let body = ctx
            .run("reading secret", response.text())
            .await?
            .map_err(|e| SecretError::new(SecretErrorKind::Fetch(e.to_string())))?;

        let value = body.trim();
        if value.is_empty() {
            return Err(SecretError::new(SecretErrorKind::Empty(name.to_string())).into());
        }

        tracing::debug!("Fetched secret");
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let fetcher = HttpSecretFetcher::new("https://kv.example/values/", None);
        assert_eq!(
            fetcher.url_for("token").unwrap().as_str(),
            "https://kv.example/values/token"
        );
    }

    #[test]
    fn test_name_is_a_single_escaped_segment() {
        let fetcher = HttpSecretFetcher::new("https://kv.example/values", None);

        let url = fetcher.url_for("/prod/slack/token").unwrap();
        assert_eq!(url.path(), "/values/%2Fprod%2Fslack%2Ftoken");

        let url = fetcher.url_for("a?b").unwrap();
        assert_eq!(url.path(), "/values/a%3Fb");
        assert_eq!(url.query(), None);

        let url = fetcher.url_for("a#b").unwrap();
        assert_eq!(url.path(), "/values/a%23b");
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_unusable_base_url_is_fetch_error() {
        let fetcher = HttpSecretFetcher::new("not a url", None);
        let err = fetcher.url_for("token").unwrap_err();
        assert!(matches!(err.kind, SecretErrorKind::Fetch(_)));

        let fetcher = HttpSecretFetcher::new("mailto:ops@example.com", None);
        assert!(fetcher.url_for("token").is_err());
    }

    #[test]
    fn test_debug_redacts_auth_token() {
        let fetcher = HttpSecretFetcher::new("https://kv.example", Some("hunter2".to_string()));
        assert!(!format!("{:?}", fetcher).contains("hunter2"));
    }
}
