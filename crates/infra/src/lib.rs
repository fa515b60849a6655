//! Infrastructure layer: persistence of the inventory store.

pub mod repository;

pub use repository::{
    DEFAULT_INVENTORY_PATH, InMemoryRepository, InventoryRepository, JsonFileRepository,
    StoreError, load_inventory, save_inventory,
};
