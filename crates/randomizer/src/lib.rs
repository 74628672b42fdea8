//! Randomizer - pick from lists of options in chat.
//!
//! A slash command that randomly chooses between options, and remembers named
//! groups of options for later.
//!
//! # Quick Start
//!
//! ```rust
//! use randomizer::{App, Context, MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = App::new("/randomize", Arc::new(MemoryStore::new()));
//! let tokens: Vec<String> = "/save lunch tacos pizza"
//!     .split_whitespace()
//!     .map(String::from)
//!     .collect();
//!
//! let outcome = app.main(&Context::new(), &tokens).await?;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `randomizer_error` - Error types with separate cause and help text
//! - `randomizer_core` - Context, Operation, Request, Outcome
//! - `randomizer_store` - Option store contract and in-memory backend
//! - `randomizer_secret` - Static and cached remote secret providers
//! - `randomizer_app` - Parser, dispatcher and handlers
//!
//! This crate re-exports everything for convenience and adds configuration
//! loading and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;

pub use config::RandomizerConfig;
pub use observability::{LoggingConfig, init_logging};

pub use randomizer_app::*;
pub use randomizer_core::*;
pub use randomizer_error::*;
pub use randomizer_secret::*;
pub use randomizer_store::*;
