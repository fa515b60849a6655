//! JSON file persistence.
//!
//! File format: one JSON object, keys are item names, values are
//! non-negative integers. Written pretty-printed with a 4-space indent.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use stockpile_core::ItemName;
use stockpile_inventory::{Inventory, Quantity};

use super::r#trait::{InventoryRepository, StoreError};

pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Read an inventory from `path`.
///
/// A missing file is not an error: it is logged and an empty inventory is
/// returned. Zero quantities in the file are dropped.
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Inventory, StoreError> {
    let path = path.as_ref();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory file not found; starting with empty inventory");
            return Ok(Inventory::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let quantities: IndexMap<ItemName, Quantity> =
        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let zeros = quantities.values().filter(|qty| **qty == 0).count();
    if zeros > 0 {
        tracing::debug!(path = %path.display(), dropped = zeros, "dropping zero-quantity entries");
    }

    let inventory = Inventory::from_quantities(quantities);
    tracing::debug!(path = %path.display(), items = inventory.len(), "inventory loaded");
    Ok(inventory)
}

/// Write `inventory` to `path`, replacing any existing file.
pub fn save_inventory(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory
        .quantities()
        .serialize(&mut ser)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');

    fs::write(path, buf).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), items = inventory.len(), "inventory saved");
    Ok(())
}

/// Repository backed by a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_PATH)
    }
}

impl InventoryRepository for JsonFileRepository {
    fn load(&self) -> Result<Inventory, StoreError> {
        load_inventory(&self.path)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        save_inventory(inventory, &self.path)
    }
}
