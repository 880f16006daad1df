//! Roll-up operation: aggregate to a coarser temporal level
//!
//! Groups the view by one temporal level (year, quarter, month), optionally
//! combined with one categorical dimension, and sums sales per group.
//! Groups are ordered by key (temporal first, then category), matching the
//! order a sorted group-by produces; top-N ranking breaks ties by that
//! group order.

use cb_core::{FactRecord, FactView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Temporal aggregation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeLevel {
    Year,
    Quarter,
    Month,
}

impl TimeLevel {
    fn key_of(self, record: &FactRecord) -> i64 {
        match self {
            TimeLevel::Year => i64::from(record.year()),
            TimeLevel::Quarter => i64::from(record.quarter()),
            TimeLevel::Month => i64::from(record.month()),
        }
    }

    fn label_of(self, key: i64) -> String {
        match self {
            TimeLevel::Quarter => format!("Q{}", key),
            _ => key.to_string(),
        }
    }
}

impl fmt::Display for TimeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeLevel::Year => "year",
            TimeLevel::Quarter => "quarter",
            TimeLevel::Month => "month",
        };
        write!(f, "{}", s)
    }
}

/// Optional secondary grouping dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryDim {
    Product,
    Region,
}

impl CategoryDim {
    fn value_of(self, record: &FactRecord) -> String {
        match self {
            CategoryDim::Product => record.product.clone(),
            CategoryDim::Region => record.region.clone(),
        }
    }
}

impl fmt::Display for CategoryDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CategoryDim::Product => "product",
            CategoryDim::Region => "region",
        };
        write!(f, "{}", s)
    }
}

/// One aggregated group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollupGroup {
    /// Temporal group label (e.g. "2024", "Q3", "11")
    pub period: String,
    /// Secondary dimension value, when one was chosen
    pub category: Option<String>,
    /// Summed sales for the group
    pub total: u64,
}

impl RollupGroup {
    /// "2024" or "2024 - A" style display label
    pub fn label(&self) -> String {
        match &self.category {
            Some(c) => format!("{} - {}", self.period, c),
            None => self.period.clone(),
        }
    }
}

/// Result of a roll-up operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupResult {
    /// Temporal level the view was rolled up to
    pub level: TimeLevel,
    /// Secondary dimension, when one was chosen
    pub by: Option<CategoryDim>,
    /// All groups, ordered by group key
    pub groups: Vec<RollupGroup>,
}

impl RollupResult {
    /// Top `n` groups by summed sales, ties broken by group order
    pub fn top(&self, n: usize) -> Vec<&RollupGroup> {
        let mut ranked: Vec<&RollupGroup> = self.groups.iter().collect();
        // Stable sort keeps the original group order for equal totals
        ranked.sort_by(|a, b| b.total.cmp(&a.total));
        ranked.truncate(n);
        ranked
    }

    /// Sum over all groups (equals the view total)
    pub fn grand_total(&self) -> u64 {
        self.groups.iter().map(|g| g.total).sum()
    }
}

/// Roll the view up to a temporal level, optionally split by a category
pub fn rollup(view: &FactView<'_>, level: TimeLevel, by: Option<CategoryDim>) -> RollupResult {
    let mut sums: BTreeMap<(i64, Option<String>), u64> = BTreeMap::new();
    for record in view.records() {
        let key = (level.key_of(record), by.map(|d| d.value_of(record)));
        *sums.entry(key).or_insert(0) += record.sales_amount;
    }

    RollupResult {
        level,
        by,
        groups: sums
            .into_iter()
            .map(|((period_key, category), total)| RollupGroup {
                period: level.label_of(period_key),
                category,
                total,
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "rollup_test.rs"]
mod tests;
