//! LIFO stack inventory
//!
//! Records are pushed in file order, so the last loaded record sits on top.
//! Only the top is reachable through [`StackInventory::push`],
//! [`StackInventory::pop`] and [`StackInventory::peek`]; queries walk the
//! stack top-to-bottom without changing it.
//!
//! # Processing Sold Items
//!
//! [`StackInventory::process_sold_items`] drains the whole stack into a
//! temporary stack, dropping sold records on the way, then pops the
//! temporary stack back onto the inventory. The retained records come out
//! of that round trip in their original relative order.

use super::{Inventory, Variant};
use crate::record::InventoryItem;
use crate::report::Listing;
use tracing::{debug, info};

/// Stack of records; the last element of `items` is the top
#[derive(Debug, Clone, Default)]
pub struct StackInventory {
    items: Vec<InventoryItem>,
}

impl StackInventory {
    pub fn new() -> Self {
        StackInventory::default()
    }

    pub fn push(&mut self, item: InventoryItem) {
        debug!(engine_number = item.engine_number(), "pushed onto stack");
        self.items.push(item);
    }

    /// Remove the top record; `None` when the stack is empty
    pub fn pop(&mut self) -> Option<InventoryItem> {
        self.items.pop()
    }

    /// Top record without removing it; `None` when the stack is empty
    pub fn peek(&self) -> Option<&InventoryItem> {
        self.items.last()
    }

    /// Remove every sold record, returning them in the order they were popped
    pub fn process_sold_items(&mut self) -> Vec<InventoryItem> {
        let mut temp = Vec::with_capacity(self.items.len());
        let mut sold = Vec::new();

        while let Some(item) = self.items.pop() {
            if item.is_sold() {
                debug!(engine_number = item.engine_number(), "processed sold item");
                sold.push(item);
            } else {
                temp.push(item);
            }
        }

        while let Some(item) = temp.pop() {
            self.items.push(item);
        }

        info!(
            removed = sold.len(),
            remaining = self.items.len(),
            "processed sold items"
        );
        sold
    }
}

impl Inventory for StackInventory {
    fn variant(&self) -> Variant {
        Variant::Stack
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: InventoryItem) -> bool {
        self.push(item);
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_> {
        Box::new(self.items.iter().rev())
    }

    /// With duplicate engine numbers the record nearest the bottom is
    /// returned: a top-down scan keeps the last match it sees.
    fn search_by_engine_number(&self, engine_number: &str) -> Option<&InventoryItem> {
        self.items
            .iter()
            .find(|item| item.matches_engine_number(engine_number))
    }

    fn listing(&self) -> Listing<'_> {
        Listing::new(self.variant().listing_title(), self.iter().collect())
            .with_count_label("Stack Size")
            .with_empty_message("Stack is empty!")
    }
}
