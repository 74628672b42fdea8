//! In-memory option store.

use crate::{OptionStore, StoreFactory};
use parking_lot::{Mutex, RwLock};
use randomizer_core::Context;
use randomizer_error::RandomizerResult;
use std::collections::HashMap;
use std::sync::Arc;

/// Option store held entirely in process memory.
///
/// Contents live as long as the store itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    groups: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saved groups.
    pub fn len(&self) -> usize {
        self.groups.read().len()
    }

    /// Whether no groups are saved.
    pub fn is_empty(&self) -> bool {
        self.groups.read().is_empty()
    }
}

#[async_trait::async_trait]
impl OptionStore for MemoryStore {
    #[tracing::instrument(skip(self, ctx))]
    async fn list(&self, ctx: &Context) -> RandomizerResult<Vec<String>> {
        ctx.check("listing groups")?;
        let mut names: Vec<String> = self.groups.read().keys().cloned().collect();
        names.sort();
        tracing::debug!(count = names.len(), "Listed groups");
        Ok(names)
    }

    #[tracing::instrument(skip(self, ctx))]
    async fn get(&self, ctx: &Context, group: &str) -> RandomizerResult<Vec<String>> {
        ctx.check("loading group")?;
        let options = self.groups.read().get(group).cloned().unwrap_or_default();
        tracing::debug!(count = options.len(), "Loaded group");
        Ok(options)
    }

    #[tracing::instrument(skip(self, ctx, options), fields(count = options.len()))]
    async fn put(&self, ctx: &Context, group: &str, options: &[String]) -> RandomizerResult<()> {
        ctx.check("saving group")?;
        self.groups
            .write()
            .insert(group.to_string(), options.to_vec());
        tracing::debug!("Saved group");
        Ok(())
    }

    #[tracing::instrument(skip(self, ctx))]
    async fn delete(&self, ctx: &Context, group: &str) -> RandomizerResult<bool> {
        ctx.check("deleting group")?;
        let existed = self.groups.write().remove(group).is_some();
        tracing::debug!(existed, "Deleted group");
        Ok(existed)
    }
}

/// Keeps one [`MemoryStore`] per partition.
#[derive(Debug, Default)]
pub struct MemoryStoreFactory {
    partitions: Mutex<HashMap<String, Arc<MemoryStore>>>,
}

impl MemoryStoreFactory {
    /// Create a factory with no partitions.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreFactory for MemoryStoreFactory {
    fn store_for(&self, partition: &str) -> Arc<dyn OptionStore> {
        let mut partitions = self.partitions.lock();
        let store = partitions.entry(partition.to_string()).or_insert_with(|| {
            tracing::debug!(partition, "Creating memory store partition");
            Arc::new(MemoryStore::new())
        });
        Arc::clone(store) as Arc<dyn OptionStore>
    }
}
