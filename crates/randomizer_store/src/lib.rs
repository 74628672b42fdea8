//! Option group storage for the randomizer.
//!
//! The command handlers never talk to a database directly. They go through
//! the [`OptionStore`] trait, which any backend can implement. This crate
//! ships the contract plus [`MemoryStore`], an in-process backend used for
//! local runs and tests.
//!
//! # Example
//!
//! ```rust
//! use randomizer_core::Context;
//! use randomizer_store::{MemoryStore, OptionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! let ctx = Context::new();
//!
//! store.put(&ctx, "lunch", &["tacos".to_string(), "pizza".to_string()]).await?;
//! assert_eq!(store.get(&ctx, "lunch").await?, vec!["tacos", "pizza"]);
//! assert!(store.delete(&ctx, "lunch").await?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod storage;

pub use memory::{MemoryStore, MemoryStoreFactory};
pub use randomizer_error::{StoreError, StoreErrorKind};
pub use storage::{OptionStore, StoreFactory};
