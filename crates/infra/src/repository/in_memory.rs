use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockpile_inventory::Inventory;

use super::r#trait::{InventoryRepository, StoreError};

/// In-memory repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: RwLock<Option<Inventory>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `inventory`.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(Some(inventory)),
        }
    }

    /// Whether `save` has been called (or the repository was seeded).
    pub fn is_written(&self) -> bool {
        self.read().is_some()
    }

    // A panic while holding the lock leaves the last stored snapshot intact,
    // so poisoning is recovered from rather than reported.
    fn read(&self) -> RwLockReadGuard<'_, Option<Inventory>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Inventory>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self) -> Result<Inventory, StoreError> {
        Ok(self.read().clone().unwrap_or_default())
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        *self.write() = Some(inventory.clone());
        Ok(())
    }
}
