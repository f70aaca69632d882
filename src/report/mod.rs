//! Text reports over inventory collections
//!
//! - [`Listing`]: numbered table of records, the "display all" output
//! - [`InventorySummary`]: status counts and the fixed-brand distribution
//! - [`InventoryStatistics`]: full statistics with percentages and a
//!   per-brand frequency table
//!
//! Reports borrow nothing from the collection they describe once built,
//! except [`Listing`], which holds references for the duration of a render.

use crate::constants::{
    RULE_WIDTH, STATUS_ON_HAND, STATUS_SOLD, STOCK_NEW, STOCK_OLD, TRACKED_BRANDS,
};
use crate::record::InventoryItem;
use rustc_hash::FxHashMap;
use std::fmt;

/// Share of `part` in `total` as a percentage; 0.0 for an empty total
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Round to one decimal place, ties away from zero
///
/// `{:.1}` alone rounds ties to even and would print 6.25 as `6.2`.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Numbered table of records under a title
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub title: String,
    /// Label of the count line, e.g. `"Total Items"` or `"Stack Size"`
    pub count_label: &'static str,
    /// Line printed instead of the table when there are no records
    pub empty_message: Option<&'static str>,
    pub items: Vec<&'a InventoryItem>,
}

impl<'a> Listing<'a> {
    pub fn new(title: impl Into<String>, items: Vec<&'a InventoryItem>) -> Self {
        Listing {
            title: title.into(),
            count_label: "Total Items",
            empty_message: None,
            items,
        }
    }

    pub fn with_count_label(mut self, count_label: &'static str) -> Self {
        self.count_label = count_label;
        self
    }

    pub fn with_empty_message(mut self, empty_message: &'static str) -> Self {
        self.empty_message = Some(empty_message);
        self
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.title)?;
        writeln!(f, "{}: {}", self.count_label, self.items.len())?;

        if self.items.is_empty() {
            if let Some(message) = self.empty_message {
                writeln!(f, "{}", message)?;
                return Ok(());
            }
        }

        writeln!(f, "{}", InventoryItem::header())?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        for (position, item) in self.items.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, item)?;
        }
        Ok(())
    }
}

/// Status counts plus the distribution over the tracked brand list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySummary {
    pub total: usize,
    pub on_hand: usize,
    pub sold: usize,
    /// Tracked brands with at least one record, in tracked-list order
    pub brand_distribution: Vec<(&'static str, usize)>,
}

impl InventorySummary {
    /// Build from brand and status counting functions
    pub fn from_counts(
        total: usize,
        count_by_status: impl Fn(&str) -> usize,
        count_by_brand: impl Fn(&str) -> usize,
    ) -> Self {
        let brand_distribution = TRACKED_BRANDS
            .iter()
            .map(|&brand| (brand, count_by_brand(brand)))
            .filter(|&(_, count)| count > 0)
            .collect();

        InventorySummary {
            total,
            on_hand: count_by_status(STATUS_ON_HAND),
            sold: count_by_status(STATUS_SOLD),
            brand_distribution,
        }
    }
}

impl fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Inventory Statistics ===")?;
        writeln!(f, "Total Items: {}", self.total)?;
        writeln!(f, "On-hand Items: {}", self.on_hand)?;
        writeln!(f, "Sold Items: {}", self.sold)?;
        writeln!(f)?;
        writeln!(f, "Brand Distribution:")?;
        for (brand, count) in &self.brand_distribution {
            writeln!(f, "  {}: {}", brand, count)?;
        }
        Ok(())
    }
}

/// One row of the per-brand frequency table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

/// Full statistics over a collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryStatistics {
    pub total: usize,
    pub on_hand: usize,
    pub sold: usize,
    pub old_stock: usize,
    pub new_stock: usize,
    /// Brand frequencies in first-seen order; brand keys are case-sensitive
    pub brands: Vec<BrandCount>,
}

impl InventoryStatistics {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        let mut stats = InventoryStatistics::default();
        let mut brand_index: FxHashMap<&'a str, usize> = FxHashMap::default();

        for item in items {
            stats.total += 1;

            if item.is_on_hand() {
                stats.on_hand += 1;
            } else if item.is_sold() {
                stats.sold += 1;
            }

            if item.has_stock_label(STOCK_OLD) {
                stats.old_stock += 1;
            } else if item.has_stock_label(STOCK_NEW) {
                stats.new_stock += 1;
            }

            match brand_index.get(item.brand()) {
                Some(&slot) => stats.brands[slot].count += 1,
                None => {
                    brand_index.insert(item.brand(), stats.brands.len());
                    stats.brands.push(BrandCount {
                        brand: item.brand().to_string(),
                        count: 1,
                    });
                }
            }
        }

        stats
    }

    pub fn on_hand_percentage(&self) -> f64 {
        percentage(self.on_hand, self.total)
    }

    pub fn sold_percentage(&self) -> f64 {
        percentage(self.sold, self.total)
    }

    pub fn old_stock_percentage(&self) -> f64 {
        percentage(self.old_stock, self.total)
    }

    pub fn new_stock_percentage(&self) -> f64 {
        percentage(self.new_stock, self.total)
    }

    /// Count for a brand key, compared case-sensitively like the table itself
    pub fn brand_count(&self, brand: &str) -> usize {
        self.brands
            .iter()
            .find(|b| b.brand == brand)
            .map_or(0, |b| b.count)
    }
}

impl fmt::Display for InventoryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Comprehensive Inventory Statistics ===")?;
        writeln!(f)?;
        writeln!(f, "General Statistics:")?;
        writeln!(f, "  Total Items: {}", self.total)?;
        writeln!(
            f,
            "  On-hand Items: {} ({:.1}%)",
            self.on_hand,
            round_one_decimal(self.on_hand_percentage())
        )?;
        writeln!(
            f,
            "  Sold Items: {} ({:.1}%)",
            self.sold,
            round_one_decimal(self.sold_percentage())
        )?;
        writeln!(f)?;
        writeln!(f, "Stock Label Distribution:")?;
        writeln!(
            f,
            "  Old Stock: {} ({:.1}%)",
            self.old_stock,
            round_one_decimal(self.old_stock_percentage())
        )?;
        writeln!(
            f,
            "  New Stock: {} ({:.1}%)",
            self.new_stock,
            round_one_decimal(self.new_stock_percentage())
        )?;
        writeln!(f)?;
        writeln!(f, "Brand Distribution:")?;
        for entry in &self.brands {
            writeln!(
                f,
                "  {}: {} ({:.1}%)",
                entry.brand,
                entry.count,
                round_one_decimal(percentage(entry.count, self.total))
            )?;
        }
        Ok(())
    }
}
