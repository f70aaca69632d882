//! Inventory collections
//!
//! Five interchangeable containers over [`InventoryItem`]s, each exposing the
//! same query surface through the [`Inventory`] trait:
//! - [`array`]: fixed capacity of [`MAX_SIZE`](crate::constants::MAX_SIZE), extra records refused
//! - [`linked_list`]: singly linked list with head/tail links and a size counter
//! - [`stack`]: LIFO, last loaded record on top
//! - [`queue`]: FIFO with order processing
//! - [`dynamic_array`]: growable array with sorting, status updates and statistics
//!
//! # Iteration Order
//!
//! [`Inventory::iter`] yields records in the order the structure displays
//! them: insertion order for the arrays and the list, top-to-bottom for the
//! stack, front-to-rear for the queue. Every query that walks the collection
//! leaves its size and order untouched.
//!
//! # Failure Signals
//!
//! Lookups return `Option`; only [`Inventory::try_load`] returns a `Result`.
//! [`Inventory::load`] folds a failed load into a zero count and logs the
//! cause.

pub mod array;
pub mod dynamic_array;
pub mod linked_list;
pub mod queue;
pub mod stack;

use crate::loader::{self, errors::LoadError, LoaderConfig};
use crate::record::InventoryItem;
use crate::report::Listing;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

pub use array::ArrayInventory;
pub use dynamic_array::DynamicArrayInventory;
pub use linked_list::LinkedListInventory;
pub use queue::QueueInventory;
pub use stack::StackInventory;

/// The five collection implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Array,
    LinkedList,
    Stack,
    Queue,
    DynamicArray,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Array,
        Variant::LinkedList,
        Variant::Stack,
        Variant::Queue,
        Variant::DynamicArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Array => "array",
            Variant::LinkedList => "linked-list",
            Variant::Stack => "stack",
            Variant::Queue => "queue",
            Variant::DynamicArray => "array-list",
        }
    }

    /// Title of the "display all" listing
    pub fn listing_title(self) -> &'static str {
        match self {
            Variant::Array => "Inventory Items (Array Implementation)",
            Variant::LinkedList => "Inventory Items (Linked List Implementation)",
            Variant::Stack => "Inventory Stack (LIFO)",
            Variant::Queue => "Inventory Queue (FIFO)",
            Variant::DynamicArray => "Inventory ArrayList",
        }
    }

    /// Create an empty collection of this variant
    pub fn build(self) -> Box<dyn Inventory> {
        match self {
            Variant::Array => Box::new(ArrayInventory::new()),
            Variant::LinkedList => Box::new(LinkedListInventory::new()),
            Variant::Stack => Box::new(StackInventory::new()),
            Variant::Queue => Box::new(QueueInventory::new()),
            Variant::DynamicArray => Box::new(DynamicArrayInventory::new()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown variant name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown inventory variant '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Variant::Array),
            "linked-list" | "linkedlist" | "list" => Ok(Variant::LinkedList),
            "stack" => Ok(Variant::Stack),
            "queue" => Ok(Variant::Queue),
            "array-list" | "arraylist" | "dynamic-array" => Ok(Variant::DynamicArray),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

/// Shared query and mutation surface of every collection variant
pub trait Inventory {
    fn variant(&self) -> Variant;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a record following the structure's discipline
    ///
    /// Returns `false` only when the structure is bounded and full; the
    /// record is dropped in that case.
    fn insert(&mut self, item: InventoryItem) -> bool;

    /// Records in display order
    fn iter(&self) -> Box<dyn Iterator<Item = &InventoryItem> + '_>;

    /// First record (in display order) whose engine number matches
    fn search_by_engine_number(&self, engine_number: &str) -> Option<&InventoryItem> {
        self.iter()
            .find(|item| item.matches_engine_number(engine_number))
    }

    fn count_by_brand(&self, brand: &str) -> usize {
        self.iter().filter(|item| item.has_brand(brand)).count()
    }

    fn count_by_status(&self, status: &str) -> usize {
        self.iter().filter(|item| item.has_status(status)).count()
    }

    fn filter_by_brand(&self, brand: &str) -> Vec<&InventoryItem> {
        self.iter().filter(|item| item.has_brand(brand)).collect()
    }

    fn filter_by_status(&self, status: &str) -> Vec<&InventoryItem> {
        self.iter().filter(|item| item.has_status(status)).collect()
    }

    fn listing(&self) -> Listing<'_> {
        Listing::new(self.variant().listing_title(), self.iter().collect())
    }

    /// Render the numbered "display all" table
    fn display(&self) -> String {
        self.listing().to_string()
    }

    /// Insert records in order until the structure refuses one
    ///
    /// Returns the number of records accepted.
    fn extend_records(&mut self, records: Vec<InventoryItem>) -> usize {
        let mut accepted = 0;
        for item in records {
            if !self.insert(item) {
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Load with explicit format parameters; returns the records accepted
    /// by this call
    fn try_load_with(&mut self, path: &Path, config: &LoaderConfig) -> Result<usize, LoadError> {
        let loaded = loader::read_records(path, config)?;
        let parsed = loaded.records.len();
        let accepted = self.extend_records(loaded.records);

        info!(
            variant = %self.variant(),
            loaded = accepted,
            dropped = parsed - accepted,
            skipped = loaded.skipped,
            "loaded inventory"
        );
        Ok(accepted)
    }

    /// Load a data file, reporting failures as an error
    fn try_load(&mut self, path: &Path) -> Result<usize, LoadError> {
        self.try_load_with(path, &LoaderConfig::default())
    }

    /// Load a data file, returning 0 if it cannot be read
    ///
    /// Records are appended to the current contents. The count is the
    /// number accepted by this call, not the collection's new size, so a
    /// second load into a non-empty collection returns less than `len()`.
    fn load(&mut self, path: &Path) -> usize {
        match self.try_load(path) {
            Ok(count) => count,
            Err(e) => {
                warn!(variant = %self.variant(), error = %e, "inventory load failed");
                0
            }
        }
    }
}
