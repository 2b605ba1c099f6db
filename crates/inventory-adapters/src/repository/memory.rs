//! In-memory item repository.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use inventory_core::{
    application::{ApplicationError, ports::ItemRepository},
    domain::{Item, ItemId},
    error::InventoryResult,
};
use tracing::trace;

/// Thread-safe, insertion-ordered item store.
///
/// Clones share the same underlying storage, so a test can hand one clone to
/// the controller and keep another to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    inner: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `items`, in order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items.into_iter().collect())),
        }
    }

    /// Get the number of stored items.
    pub fn len(&self) -> usize {
        self.read().map(|items| items.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents, in storage order.
    pub fn snapshot(&self) -> InventoryResult<Vec<Item>> {
        Ok(self.read()?.clone())
    }

    /// Remove every item.
    pub fn clear(&self) -> InventoryResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> InventoryResult<RwLockReadGuard<'_, Vec<Item>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::StoreLock.into())
    }

    fn write(&self) -> InventoryResult<RwLockWriteGuard<'_, Vec<Item>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLock.into())
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn find_all(&self) -> InventoryResult<Vec<Item>> {
        self.snapshot()
    }

    fn find_by_id(&self, id: &ItemId) -> InventoryResult<Option<Item>> {
        Ok(self.read()?.iter().find(|item| item.id() == id).cloned())
    }

    fn save(&self, item: &Item) -> InventoryResult<()> {
        trace!(id = %item.id(), "memory: insert");
        self.write()?.push(item.clone());
        Ok(())
    }

    /// Overwrites the first item with a matching id; no match is a no-op.
    fn update(&self, item: &Item) -> InventoryResult<()> {
        let mut items = self.write()?;
        if let Some(slot) = items.iter_mut().find(|stored| stored.id() == item.id()) {
            trace!(id = %item.id(), "memory: overwrite");
            *slot = item.clone();
        }
        Ok(())
    }

    fn delete(&self, id: &ItemId) -> InventoryResult<()> {
        let mut items = self.write()?;
        if let Some(position) = items.iter().position(|stored| stored.id() == id) {
            trace!(%id, "memory: remove");
            items.remove(position);
        }
        Ok(())
    }
}
