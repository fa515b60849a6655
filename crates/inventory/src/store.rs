//! The in-memory stock store.

use std::io;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use stockpile_core::{DomainError, DomainResult, ItemName};

use crate::log::{StockAdded, StockLog};

/// Count of one item in stock.
pub type Quantity = u64;

/// Threshold used by `low_stock` callers that have no configured value.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Mapping from item name to quantity, in insertion order.
///
/// Invariant: every entry has a quantity greater than zero. Removing stock
/// down to zero deletes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: IndexMap<ItemName, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory from raw quantities, dropping zero entries.
    pub fn from_quantities(quantities: impl IntoIterator<Item = (ItemName, Quantity)>) -> Self {
        let mut items = IndexMap::new();
        for (item, qty) in quantities {
            if qty > 0 {
                items.insert(item, qty);
            }
        }
        Self { items }
    }

    /// Add `qty` units of `item`, creating the entry if absent.
    pub fn add(&mut self, item: &str, qty: Quantity) -> DomainResult<StockAdded> {
        self.add_at(item, qty, Utc::now())
    }

    /// Same as [`Inventory::add`], appending the record to `log`.
    pub fn add_logged(&mut self, item: &str, qty: Quantity, log: &mut StockLog) -> DomainResult<()> {
        let entry = self.add(item, qty)?;
        log.record(entry);
        Ok(())
    }

    /// Same as [`Inventory::add`] with an explicit timestamp.
    pub fn add_at(
        &mut self,
        item: &str,
        qty: Quantity,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<StockAdded> {
        let name = ItemName::new(item)?;
        if qty == 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }

        let current = self.get_quantity(item);
        let updated = current
            .checked_add(qty)
            .ok_or_else(|| DomainError::invariant(format!("quantity overflow for '{name}'")))?;

        // Updating an existing key keeps its position.
        self.items.insert(name.clone(), updated);

        Ok(StockAdded {
            item: name,
            quantity: qty,
            occurred_at,
        })
    }

    /// Take `qty` units of `item` out of stock.
    ///
    /// Removing as much or more than is held deletes the entry.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> DomainResult<()> {
        if qty == 0 {
            return Err(DomainError::validation("quantity must be greater than zero"));
        }

        let current = self
            .items
            .get_mut(item)
            .ok_or_else(|| DomainError::not_found(item))?;

        if qty >= *current {
            // Order of the remaining entries is part of the observable state.
            self.items.shift_remove(item);
        } else {
            *current -= qty;
        }
        Ok(())
    }

    /// Quantity in stock, or 0 when the item is absent.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Items whose quantity is strictly below `threshold`, in mapping order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<&ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item)
            .collect()
    }

    /// Write the items report: a header, then `item -> qty` per line.
    pub fn report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    pub fn quantities(&self) -> &IndexMap<ItemName, Quantity> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl core::fmt::Display for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Items Report:")?;
        for (item, qty) in &self.items {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn stocked(entries: &[(&str, Quantity)]) -> Inventory {
        let mut inventory = Inventory::new();
        for (item, qty) in entries {
            inventory.add(item, *qty).unwrap();
        }
        inventory
    }

    #[test]
    fn add_then_remove_leaves_the_difference() {
        let mut inventory = Inventory::new();
        inventory.add("apple", 10).unwrap();
        inventory.remove("apple", 3).unwrap();
        assert_eq!(inventory.get_quantity("apple"), 7);
    }

    #[test]
    fn add_returns_a_record_of_the_addition() {
        let mut inventory = Inventory::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let entry = inventory.add_at("apple", 4, at).unwrap();
        assert_eq!(entry.item.as_str(), "apple");
        assert_eq!(entry.quantity, 4);
        assert_eq!(entry.occurred_at, at);
    }

    #[test]
    fn add_logged_appends_to_the_callers_log() {
        let mut inventory = Inventory::new();
        let mut log = StockLog::new();

        inventory.add_logged("apple", 10, &mut log).unwrap();
        inventory.add_logged("apple", 5, &mut log).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].quantity, 5);
        assert_eq!(inventory.get_quantity("apple"), 15);
    }

    #[test]
    fn add_rejects_blank_name_without_change() {
        let mut inventory = stocked(&[("apple", 1)]);
        let before = inventory.clone();

        let err = inventory.add("  ", 3).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory, before);
    }

    #[test]
    fn add_rejects_zero_quantity_without_change() {
        let mut inventory = Inventory::new();
        let mut log = StockLog::new();

        let err = inventory.add_logged("apple", 0, &mut log).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(inventory.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn add_overflow_is_rejected() {
        let mut inventory = stocked(&[("apple", Quantity::MAX)]);
        let err = inventory.add("apple", 1).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(inventory.get_quantity("apple"), Quantity::MAX);
    }

    #[test]
    fn remove_missing_item_is_not_found() {
        let mut inventory = stocked(&[("apple", 7)]);
        let before = inventory.clone();

        let err = inventory.remove("nonexistent", 1).unwrap_err();
        assert_eq!(err, DomainError::not_found("nonexistent"));
        assert_eq!(inventory, before);
    }

    #[test]
    fn remove_zero_is_rejected() {
        let mut inventory = stocked(&[("apple", 7)]);
        let err = inventory.remove("apple", 0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(inventory.get_quantity("apple"), 7);
    }

    #[test]
    fn removing_an_entry_keeps_order_of_the_rest() {
        let mut inventory = stocked(&[("apple", 1), ("banana", 2), ("cherry", 3)]);
        inventory.remove("apple", 1).unwrap();

        let names: Vec<&str> = inventory.iter().map(|(item, _)| item.as_str()).collect();
        assert_eq!(names, ["banana", "cherry"]);
    }

    #[test]
    fn get_quantity_of_absent_item_is_zero() {
        assert_eq!(Inventory::new().get_quantity("ghost"), 0);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let inventory = stocked(&[("apple", 7), ("banana", 2)]);
        let low: Vec<&str> = inventory.low_stock(5).into_iter().map(ItemName::as_str).collect();
        assert_eq!(low, ["banana"]);

        let at_threshold: Vec<&str> =
            inventory.low_stock(7).into_iter().map(ItemName::as_str).collect();
        assert_eq!(at_threshold, ["banana"]);
    }

    #[test]
    fn low_stock_follows_mapping_order() {
        let inventory = stocked(&[("pear", 1), ("apple", 9), ("fig", 3)]);
        let low: Vec<&str> = inventory
            .low_stock(DEFAULT_LOW_STOCK_THRESHOLD)
            .into_iter()
            .map(ItemName::as_str)
            .collect();
        assert_eq!(low, ["pear", "fig"]);
    }

    #[test]
    fn from_quantities_drops_zero_entries() {
        let inventory = Inventory::from_quantities([
            (ItemName::new("apple").unwrap(), 0),
            (ItemName::new("banana").unwrap(), 2),
        ]);
        assert!(!inventory.contains("apple"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn report_lists_items_in_order() {
        let inventory = stocked(&[("apple", 7), ("banana", 2)]);
        let mut out = Vec::new();
        inventory.report(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Items Report:\napple -> 7\nbanana -> 2\n"
        );
    }

    #[test]
    fn report_of_empty_inventory_is_just_the_header() {
        assert_eq!(Inventory::new().to_string(), "Items Report:\n");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: adding stock raises the quantity by exactly that amount.
        #[test]
        fn add_increments_by_qty(
            prior in 0u64..1_000_000u64,
            qty in 1u64..1_000_000u64,
        ) {
            let mut inventory = Inventory::new();
            if prior > 0 {
                inventory.add("widget", prior).unwrap();
            }

            inventory.add("widget", qty).unwrap();
            prop_assert_eq!(inventory.get_quantity("widget"), prior + qty);
        }

        /// Property: removing at least the held quantity deletes the entry.
        #[test]
        fn remove_at_or_above_stock_deletes(
            held in 1u64..1_000_000u64,
            extra in 0u64..1_000u64,
        ) {
            let mut inventory = Inventory::new();
            inventory.add("widget", held).unwrap();

            inventory.remove("widget", held + extra).unwrap();
            prop_assert!(!inventory.contains("widget"));
            prop_assert_eq!(inventory.get_quantity("widget"), 0);
        }

        /// Property: no sequence of operations leaves a zero entry behind.
        #[test]
        fn entries_are_always_positive(
            ops in prop::collection::vec((any::<bool>(), 0usize..3, 0u64..20u64), 0..40)
        ) {
            let names = ["a", "b", "c"];
            let mut inventory = Inventory::new();

            for (is_add, idx, qty) in ops {
                let _ = if is_add {
                    inventory.add(names[idx], qty).map(|_| ())
                } else {
                    inventory.remove(names[idx], qty)
                };
            }

            prop_assert!(inventory.iter().all(|(_, qty)| qty > 0));
        }
    }
}
