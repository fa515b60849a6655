use std::io;
use std::path::PathBuf;

use thiserror::Error;

use stockpile_inventory::Inventory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse inventory file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save boundary for a whole inventory snapshot.
///
/// Each call is a self-contained, blocking operation; there is no
/// transaction spanning a load and a later save.
pub trait InventoryRepository {
    /// Load the stored inventory. A store that has never been written
    /// yields an empty inventory.
    fn load(&self) -> Result<Inventory, StoreError>;

    /// Replace the stored inventory with `inventory`.
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;
}

impl<R> InventoryRepository for &R
where
    R: InventoryRepository + ?Sized,
{
    fn load(&self) -> Result<Inventory, StoreError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        (**self).save(inventory)
    }
}
