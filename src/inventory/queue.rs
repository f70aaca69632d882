//! FIFO queue inventory
//!
//! Records are enqueued at the rear and dequeued from the front. The queue
//! also keeps a running count of orders processed over its lifetime.

use super::{Inventory, Variant};
use crate::constants::STATUS_SOLD;
use crate::record::InventoryItem;
use crate::report::Listing;
use std::collections::VecDeque;
use tracing::info;

/// One record sold by [`QueueInventory::process_orders`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOrder {
    pub brand: String,
    pub engine_number: String,
}

/// Outcome of a [`QueueInventory::process_orders`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBatch {
    /// Orders processed by this call, front-to-rear
    pub orders: Vec<ProcessedOrder>,
    /// Orders processed over the queue's lifetime, this call included
    pub total_processed: usize,
    /// Queue size after processing
    pub remaining: usize,
}

impl OrderBatch {
    pub fn processed(&self) -> usize {
        self.orders.len()
    }
}

/// Queue of records with a cumulative processed-order counter
#[derive(Debug, Clone, Default)]
pub struct QueueInventory {
    items: VecDeque<InventoryItem>,
    processed_count: usize,
}

impl QueueInventory {
    pub fn new() -> Self {
        QueueInventory::default()
    }

    pub fn enqueue(&mut self, item: InventoryItem) {
        self.items.push_back(item);
    }

    /// Remove the front record; `None` when the queue is empty
    pub fn dequeue(&mut self) -> Option<InventoryItem> {
        self.items.pop_front()
    }

    /// Front record without removing it; `None` when the queue is empty
    pub fn peek_front(&self) -> Option<&InventoryItem> {
        self.items.front()
    }

    pub fn processed_total(&self) -> usize {
        self.processed_count
    }

    /// Sell up to `num_orders` on-hand records, scanning from the front
    ///
    /// Every scanned record is re-enqueued, sold or not, followed by the
    /// records the scan never reached, so size and relative order are
    /// unchanged.
    pub fn process_orders(&mut self, num_orders: usize) -> OrderBatch {
        let mut orders = Vec::new();
        let mut temp = VecDeque::with_capacity(self.items.len());

        while orders.len() < num_orders {
            let Some(mut item) = self.items.pop_front() else {
                break;
            };

            if item.is_on_hand() {
                self.processed_count += 1;
                info!(
                    order = orders.len() + 1,
                    brand = item.brand(),
                    engine_number = item.engine_number(),
                    "processing order"
                );
                item.set_status(STATUS_SOLD);
                orders.push(ProcessedOrder {
                    brand: item.brand().to_string(),
                    engine_number: item.engine_number().to_string(),
                });
            }

            temp.push_back(item);
        }

        temp.append(&mut self.items);
        self.items = temp;

        OrderBatch {
            orders,
            total_processed: self.processed_count,
            remaining: self.items.len(),
        }
    }
}

impl Inventory for QueueInventory {
    fn variant(&self) -> Variant {
        Variant::Queue
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn insert(&mut self, item: InventoryItem) -> bool {
        self.enqueue(item);
        true
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_> {
        Box::new(self.items.iter())
    }

    fn listing(&self) -> Listing<'_> {
        Listing::new(self.variant().listing_title(), self.iter().collect())
            .with_count_label("Queue Size")
            .with_empty_message("Queue is empty!")
    }
}
