//! Providers for the secret that authenticates inbound requests.
//!
//! Chat platforms sign or tag every slash command request with a shared
//! secret. Whatever authenticates those requests asks a [`SecretProvider`]
//! for the value it should expect.
//!
//! # Providers
//!
//! - [`StaticSecret`] - a fixed, configured value
//! - [`CachedSecret`] - a value looked up through a [`SecretFetcher`] and
//!   cached for a TTL, with at most one lookup in flight at a time
//!
//! [`SecretConfig`] selects and builds one of them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cached;
mod config;
mod http;
mod provider;

pub use cached::CachedSecret;
pub use config::{DEFAULT_SECRET_TTL, RemoteSecretConfig, RemoteSecretConfigBuilder, SecretConfig};
pub use http::HttpSecretFetcher;
pub use provider::{SecretFetcher, SecretProvider, StaticSecret};
pub use randomizer_error::{SecretError, SecretErrorKind};
