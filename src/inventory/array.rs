//! Bounded array inventory
//!
//! Records live in a fixed block of [`MAX_SIZE`] slots filled from the
//! front. Once every slot is taken further records are refused without an
//! error; a load simply stops accepting lines.

use super::{Inventory, Variant};
use crate::constants::MAX_SIZE;
use crate::record::InventoryItem;
use crate::report::InventorySummary;
use tracing::trace;

/// Fixed-capacity array of records with an item counter
#[derive(Debug, Clone)]
pub struct ArrayInventory {
    slots: [Option<InventoryItem>; MAX_SIZE],
    item_count: usize,
}

impl ArrayInventory {
    pub fn new() -> Self {
        ArrayInventory {
            slots: std::array::from_fn(|_| None),
            item_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        MAX_SIZE
    }

    pub fn is_full(&self) -> bool {
        self.item_count == MAX_SIZE
    }

    /// Record at a 0-based index
    pub fn get(&self, index: usize) -> Option<&InventoryItem> {
        if index < self.item_count {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Status counts and the distribution over the tracked brands
    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_counts(
            self.item_count,
            |status| self.count_by_status(status),
            |brand| self.count_by_brand(brand),
        )
    }

    /// Tracked brands present in the array with their counts
    pub fn brand_distribution(&self) -> Vec<(&'static str, usize)> {
        self.summary().brand_distribution
    }
}

impl Default for ArrayInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory for ArrayInventory {
    fn variant(&self) -> Variant {
        Variant::Array
    }

    fn len(&self) -> usize {
        self.item_count
    }

    fn insert(&mut self, item: InventoryItem) -> bool {
        if self.is_full() {
            trace!(engine_number = item.engine_number(), "array full, record refused");
            return false;
        }
        self.slots[self.item_count] = Some(item);
        self.item_count += 1;
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_> {
        Box::new(self.slots[..self.item_count].iter().flatten())
    }

    fn search_by_engine_number(&self, engine_number: &str) -> Option<&InventoryItem> {
        // Linear scan over the occupied prefix
        for index in 0..self.item_count {
            if let Some(item) = &self.slots[index] {
                if item.matches_engine_number(engine_number) {
                    return Some(item);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> InventoryItem {
        InventoryItem::new("1/1/2023", "Old", "Honda", format!("EN{:03}", n), "On-hand")
    }

    #[test]
    fn test_insert_refused_when_full() {
        let mut array = ArrayInventory::new();
        for n in 0..MAX_SIZE {
            assert!(array.insert(numbered(n)));
        }
        assert!(array.is_full());
        assert!(!array.insert(numbered(MAX_SIZE)));
        assert_eq!(array.len(), MAX_SIZE);
        assert!(array.search_by_engine_number("EN100").is_none());
    }

    #[test]
    fn test_extend_stops_at_capacity() {
        let mut array = ArrayInventory::new();
        let accepted = array.extend_records((0..150).map(numbered).collect());
        assert_eq!(accepted, MAX_SIZE);
        assert_eq!(array.get(99).map(|i| i.engine_number()), Some("EN099"));
        assert!(array.get(100).is_none());
    }

    #[test]
    fn test_search_first_match_wins() {
        let mut array = ArrayInventory::new();
        array.insert(InventoryItem::new("1/1/2023", "Old", "Honda", "EN1", "On-hand"));
        array.insert(InventoryItem::new("1/2/2023", "New", "Suzuki", "en1", "Sold"));

        let found = array.search_by_engine_number("EN1").expect("match");
        assert_eq!(found.brand(), "Honda");
    }

    #[test]
    fn test_summary_brand_distribution() {
        let mut array = ArrayInventory::new();
        array.insert(InventoryItem::new("1/1/2023", "Old", "Yamaha", "EN1", "On-hand"));
        array.insert(InventoryItem::new("1/1/2023", "Old", "honda", "EN2", "Sold"));
        array.insert(InventoryItem::new("1/1/2023", "Old", "Vespa", "EN3", "Sold"));

        let summary = array.summary();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.on_hand, 1);
        assert_eq!(summary.sold, 2);
        assert_eq!(
            array.brand_distribution(),
            vec![("Honda", 1), ("Yamaha", 1)]
        );
    }
}
