//! Error types for the randomizer.
//!
//! This crate provides the foundation error types used throughout the randomizer workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Two Channels
//!
//! Every error carries two independent pieces of information:
//! - the diagnostic cause, available through `Display`, meant for logs
//! - the help text, available through [`RandomizerError::help_text`], meant for the user
//!
//! ```
//! use randomizer_error::{CommandError, CommandErrorKind, RandomizerError};
//!
//! let err: RandomizerError = CommandError::new(CommandErrorKind::MissingOperand {
//!     flag: "/show".to_string(),
//! })
//! .into();
//!
//! assert!(err.to_string().contains("requires an argument"));
//! assert!(err.help_text().contains("/show"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cancelled;
mod command;
mod config;
mod error;
mod secret;
mod store;

pub use cancelled::CancelledError;
pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use error::{RandomizerError, RandomizerErrorKind, RandomizerResult};
pub use secret::{SecretError, SecretErrorKind};
pub use store::{StoreError, StoreErrorKind};
