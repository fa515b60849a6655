//! Inventory persistence boundary.
//!
//! The domain store never touches the filesystem; callers load an
//! `Inventory` through a repository, mutate it, and hand it back to `save`.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_INVENTORY_PATH, JsonFileRepository, load_inventory, save_inventory};
pub use r#trait::{InventoryRepository, StoreError};
