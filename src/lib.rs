//! # Introduction
//!
//! motorstock keeps a small inventory of vehicle-engine records in five
//! classic data structures and answers the same questions with each of them:
//! display, search, filter, count, add/remove, sort and statistics.
//!
//! ## Data flow
//!
//! ```text
//! Data file → Loader → InventoryItem records → Inventory variant → Reports
//! ```
//!
//! 1. [`loader`]: skips the header lines, splits each data line on the
//!    delimiter and builds [`record::InventoryItem`]s, dropping short lines.
//! 2. [`record`]: the five-field record and case-insensitive matching.
//! 3. [`inventory`]: the [`inventory::Inventory`] trait and its five
//!    implementations: bounded array, linked list, stack, queue and
//!    growable array. [`inventory::Variant`] picks one at startup.
//! 4. [`report`]: numbered listings, the tracked-brand summary and full
//!    statistics, all rendered through `Display`.
//! 5. [`constants`]: capacity, file-format parameters and status values.
//!
//! ## Example
//!
//! ```no_run
//! use motorstock::inventory::{Inventory, Variant};
//! use std::path::Path;
//!
//! let mut inventory = Variant::Queue.build();
//! let loaded = inventory.load(Path::new(motorstock::constants::DEFAULT_DATA_PATH));
//! println!("Loaded {} items", loaded);
//! print!("{}", inventory.display());
//! ```
//!
//! Logging goes through [`tracing`]; install a subscriber in the embedding
//! program to see load and processing events.

pub mod constants;
pub mod inventory;
pub mod loader;
pub mod record;
pub mod report;

pub use inventory::{Inventory, Variant};
pub use loader::errors::LoadError;
pub use record::InventoryItem;
