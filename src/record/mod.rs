//! Inventory record type
//!
//! This module provides [`InventoryItem`], the flat five-field record every
//! collection variant stores, together with the case-insensitive string
//! helpers all variants share.
//!
//! # Matching
//!
//! Brand, status, stock label and engine number comparisons are exact but
//! case-insensitive: `"honda"` matches `"Honda"`, `"Hon"` matches nothing.

use crate::constants::{MIN_FIELDS, STATUS_ON_HAND, STATUS_SOLD};
use crate::loader::LoaderConfig;
use std::cmp::Ordering;
use std::fmt;

/// Case-insensitive string equality
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive lexicographic ordering
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A single vehicle-engine inventory record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InventoryItem {
    date_entered: String,
    stock_label: String,
    brand: String,
    engine_number: String,
    status: String,
}

impl InventoryItem {
    pub fn new(
        date_entered: impl Into<String>,
        stock_label: impl Into<String>,
        brand: impl Into<String>,
        engine_number: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        InventoryItem {
            date_entered: date_entered.into(),
            stock_label: stock_label.into(),
            brand: brand.into(),
            engine_number: engine_number.into(),
            status: status.into(),
        }
    }

    /// Parse one data line into a record
    ///
    /// Returns `None` when the line has fewer than `config.min_fields` fields.
    /// Trailing empty fields do not count, so `"a,b,c,d,"` has four fields.
    pub fn parse_line(line: &str, config: &LoaderConfig) -> Option<Self> {
        let mut fields: Vec<&str> = line.split(config.delimiter).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        // The first five fields are always read, whatever the configured minimum
        if fields.len() < config.min_fields.max(MIN_FIELDS) {
            return None;
        }

        Some(InventoryItem::new(
            fields[0].trim(),
            fields[1].trim(),
            fields[2].trim(),
            fields[3].trim(),
            fields[4].trim(),
        ))
    }

    pub fn date_entered(&self) -> &str {
        &self.date_entered
    }

    pub fn stock_label(&self) -> &str {
        &self.stock_label
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn engine_number(&self) -> &str {
        &self.engine_number
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_date_entered(&mut self, date_entered: impl Into<String>) {
        self.date_entered = date_entered.into();
    }

    pub fn set_stock_label(&mut self, stock_label: impl Into<String>) {
        self.stock_label = stock_label.into();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn set_engine_number(&mut self, engine_number: impl Into<String>) {
        self.engine_number = engine_number.into();
    }

    /// Replace the status, returning the previous value
    pub fn set_status(&mut self, status: impl Into<String>) -> String {
        std::mem::replace(&mut self.status, status.into())
    }

    pub fn matches_engine_number(&self, engine_number: &str) -> bool {
        eq_ignore_case(&self.engine_number, engine_number)
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        eq_ignore_case(&self.brand, brand)
    }

    pub fn has_status(&self, status: &str) -> bool {
        eq_ignore_case(&self.status, status)
    }

    pub fn has_stock_label(&self, stock_label: &str) -> bool {
        eq_ignore_case(&self.stock_label, stock_label)
    }

    pub fn is_on_hand(&self) -> bool {
        self.has_status(STATUS_ON_HAND)
    }

    pub fn is_sold(&self) -> bool {
        self.has_status(STATUS_SOLD)
    }

    /// Column header matching the [`Display`](fmt::Display) row layout
    pub fn header() -> String {
        format!(
            "{:<12} | {:<10} | {:<10} | {:<14} | {:<8}",
            "Date", "Stock Label", "Brand", "Engine Number", "Status"
        )
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} | {:<10} | {:<10} | {:<14} | {:<8}",
            self.date_entered, self.stock_label, self.brand, self.engine_number, self.status
        )
    }
}
