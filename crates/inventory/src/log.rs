//! Add-only record of stock additions.

use chrono::{DateTime, Utc};

use stockpile_core::ItemName;

use crate::store::Quantity;

/// Record of one successful `Inventory::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdded {
    pub item: ItemName,
    pub quantity: Quantity,
    pub occurred_at: DateTime<Utc>,
}

impl core::fmt::Display for StockAdded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.occurred_at, self.quantity, self.item
        )
    }
}

/// Caller-owned, ordered log of additions. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLog {
    entries: Vec<StockAdded>,
}

impl StockLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: StockAdded) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StockAdded] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a StockLog {
    type Item = &'a StockAdded;
    type IntoIter = core::slice::Iter<'a, StockAdded>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_like_a_log_line() {
        let entry = StockAdded {
            item: ItemName::new("apple").unwrap(),
            quantity: 10,
            occurred_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };
        assert_eq!(entry.to_string(), "2024-03-01 12:00:00 UTC: Added 10 of apple");
    }

    #[test]
    fn keeps_insertion_order() {
        let mut log = StockLog::new();
        assert!(log.is_empty());

        for (name, qty) in [("apple", 1), ("banana", 2)] {
            log.record(StockAdded {
                item: ItemName::new(name).unwrap(),
                quantity: qty,
                occurred_at: Utc::now(),
            });
        }

        let names: Vec<&str> = log.into_iter().map(|e| e.item.as_str()).collect();
        assert_eq!(names, ["apple", "banana"]);
        assert_eq!(log.len(), 2);
    }
}
