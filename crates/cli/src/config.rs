//! Runtime configuration read from the environment at start-up.

use std::path::PathBuf;

use stockpile_infra::DEFAULT_INVENTORY_PATH;
use stockpile_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Quantity};

pub const INVENTORY_PATH_ENV: &str = "STOCKPILE_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKPILE_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Unset or blank values use the defaults; an unparsable threshold is
    /// logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let inventory_path = value(INVENTORY_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_path);

        let low_stock_threshold = match value(LOW_STOCK_THRESHOLD_ENV) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = defaults.low_stock_threshold,
                    "{} is not a non-negative integer; using default",
                    LOW_STOCK_THRESHOLD_ENV
                );
                defaults.low_stock_threshold
            }),
            None => defaults.low_stock_threshold,
        };

        Self {
            inventory_path,
            low_stock_threshold,
        }
    }
}
