//! Storage trait definitions.

use randomizer_core::Context;
use randomizer_error::RandomizerResult;
use std::sync::Arc;

/// Persistence for named groups of options.
///
/// Every method takes the caller's [`Context`] and should give up promptly
/// once it is cancelled.
#[async_trait::async_trait]
pub trait OptionStore: Send + Sync {
    /// Names of all saved groups.
    ///
    /// No saved groups is not an error: the result is simply empty.
    async fn list(&self, ctx: &Context) -> RandomizerResult<Vec<String>>;

    /// Options in the named group, in the order they were saved.
    ///
    /// A missing group yields an empty list, not an error.
    async fn get(&self, ctx: &Context, group: &str) -> RandomizerResult<Vec<String>>;

    /// Save `options` under `group`, replacing any existing group of that name.
    async fn put(&self, ctx: &Context, group: &str, options: &[String]) -> RandomizerResult<()>;

    /// Make sure `group` no longer exists.
    ///
    /// Returns whether the group existed before this call. Deleting a missing
    /// group is not an error.
    async fn delete(&self, ctx: &Context, group: &str) -> RandomizerResult<bool>;
}

/// Hands out the store for a partition, such as a single chat channel.
///
/// Groups saved in one partition are invisible from every other.
pub trait StoreFactory: Send + Sync {
    /// The store for `partition`.
    fn store_for(&self, partition: &str) -> Arc<dyn OptionStore>;
}
