//! Command handling for the randomizer.
//!
//! Raw command tokens flow through three stages:
//!
//! 1. [`parse`] turns tokens into a typed [`Request`](randomizer_core::Request)
//! 2. the dispatcher looks up the handler for the request's operation
//! 3. the handler talks to the [`OptionStore`](randomizer_store::OptionStore)
//!    and the [`Shuffler`] and produces an [`Outcome`](randomizer_core::Outcome)
//!
//! [`App::main`] runs all three.
//!
//! # Example
//!
//! ```rust
//! use randomizer_app::App;
//! use randomizer_core::{Context, Outcome};
//! use randomizer_store::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = App::new("/randomize", Arc::new(MemoryStore::new()));
//! let args: Vec<String> = ["tacos", "pizza"].iter().map(|s| s.to_string()).collect();
//!
//! match app.main(&Context::new(), &args).await? {
//!     Outcome::Selection { picks } => assert_eq!(picks.len(), 1),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod dispatch;
mod handlers;
mod parse;
mod selection;
mod validation;

pub use app::App;
pub use dispatch::dispatch;
pub use parse::{parse, parse_args};
pub use selection::{RandomShuffler, Shuffler};
pub use validation::validate_group_name;
