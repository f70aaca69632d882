//! Growable array inventory
//!
//! Index-addressed storage with no capacity limit. On top of the shared
//! queries it supports removal by index, in-place bubble sorts, status
//! updates and full statistics.
//!
//! # Sorting
//!
//! Both sorts are adjacent-swap bubble sorts: stable, case-insensitive and
//! purely lexicographic. Dates are compared as text, so `"2/1/2023"` sorts
//! after `"10/1/2023"`.

use super::{Inventory, Variant};
use crate::record::{cmp_ignore_case, InventoryItem};
use crate::report::InventoryStatistics;
use std::cmp::Ordering;
use tracing::{debug, info};

/// Result of a successful [`DynamicArrayInventory::update_status`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub engine_number: String,
    pub old_status: String,
    pub new_status: String,
}

/// Growable array of records
#[derive(Debug, Clone, Default)]
pub struct DynamicArrayInventory {
    items: Vec<InventoryItem>,
}

impl DynamicArrayInventory {
    pub fn new() -> Self {
        DynamicArrayInventory::default()
    }

    pub fn add_item(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Insert at a 0-based index; `index == len` appends
    ///
    /// Returns `false` and leaves the array unchanged when `index > len`.
    pub fn insert_at(&mut self, index: usize, item: InventoryItem) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, item);
        true
    }

    /// Replace the record at a 0-based index, returning the previous one
    pub fn replace(&mut self, index: usize, item: InventoryItem) -> Option<InventoryItem> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, item))
    }

    /// Remove the record at a 0-based index
    ///
    /// Negative or past-the-end indices return `None` and leave the array
    /// unchanged.
    pub fn remove_item(&mut self, index: isize) -> Option<InventoryItem> {
        let index = match usize::try_from(index) {
            Ok(index) if index < self.items.len() => index,
            _ => {
                debug!(index, len = self.items.len(), "invalid index");
                return None;
            }
        };

        let removed = self.items.remove(index);
        debug!(
            engine_number = removed.engine_number(),
            remaining = self.items.len(),
            "removed item"
        );
        Some(removed)
    }

    /// All records of a brand, in array order
    pub fn search_by_brand(&self, brand: &str) -> Vec<&InventoryItem> {
        self.filter_by_brand(brand)
    }

    pub fn sort_by_brand(&mut self) {
        self.bubble_sort_by(|a, b| cmp_ignore_case(a.brand(), b.brand()));
    }

    /// Sort by the date text; not calendar-aware
    pub fn sort_by_date(&mut self) {
        self.bubble_sort_by(|a, b| cmp_ignore_case(a.date_entered(), b.date_entered()));
    }

    fn bubble_sort_by(&mut self, compare: impl Fn(&InventoryItem, &InventoryItem) -> Ordering) {
        let n = self.items.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if compare(&self.items[j], &self.items[j + 1]) == Ordering::Greater {
                    self.items.swap(j, j + 1);
                }
            }
        }
    }

    /// Set the status of the first record whose engine number matches
    pub fn update_status(&mut self, engine_number: &str, new_status: &str) -> Option<StatusChange> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.matches_engine_number(engine_number))?;

        let old_status = item.set_status(new_status);
        info!(
            engine_number = item.engine_number(),
            old_status = %old_status,
            new_status,
            "status updated"
        );

        Some(StatusChange {
            engine_number: item.engine_number().to_string(),
            old_status,
            new_status: new_status.to_string(),
        })
    }

    pub fn statistics(&self) -> InventoryStatistics {
        InventoryStatistics::from_items(&self.items)
    }
}

impl Inventory for DynamicArrayInventory {
    fn variant(&self) -> Variant {
        Variant::DynamicArray
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: InventoryItem) -> bool {
        self.add_item(item);
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_> {
        Box::new(self.items.iter())
    }
}
