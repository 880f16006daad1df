//! Slice operation: fix zero or more dimension values
//!
//! A slice applies optional equality predicates on product and region to the
//! year view, reports sum/count/mean of sales, and produces the monthly
//! sum-of-sales series used for the time-series chart.

use crate::types::Summary;
use cb_core::FactView;
use serde::Serialize;
use std::collections::BTreeMap;

/// Optional equality predicates for a slice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SliceFilter {
    /// Keep only this product, when set
    pub product: Option<String>,
    /// Keep only this region, when set
    pub region: Option<String>,
}

impl SliceFilter {
    /// Whether no predicate is active
    pub fn is_unfiltered(&self) -> bool {
        self.product.is_none() && self.region.is_none()
    }

    /// Human-readable descriptions of the active predicates
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(p) = &self.product {
            parts.push(format!("product = {}", p));
        }
        if let Some(r) = &self.region {
            parts.push(format!("region = {}", r));
        }
        parts
    }
}

/// Sum of sales for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    /// Calendar month (1-12)
    pub month: u32,
    /// Summed sales for the month
    pub total: u64,
}

/// Result of a slice operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceResult {
    /// The predicates that produced this result
    pub filter: SliceFilter,
    /// Sum/count/mean over the sliced records
    pub summary: Summary,
    /// Monthly sum-of-sales series, month ascending
    pub monthly: Vec<MonthlySales>,
}

impl SliceResult {
    /// Whether the slice matched no records ("no data" signal)
    pub fn is_empty(&self) -> bool {
        self.summary.count == 0
    }
}

/// Derive the view matching a slice filter
pub fn apply<'a>(view: &FactView<'a>, filter: &SliceFilter) -> FactView<'a> {
    view.retain(|r| {
        filter.product.as_ref().is_none_or(|p| &r.product == p)
            && filter.region.as_ref().is_none_or(|g| &r.region == g)
    })
}

/// Slice the view and compute its metrics and monthly series
pub fn slice(view: &FactView<'_>, filter: &SliceFilter) -> SliceResult {
    let sliced = apply(view, filter);

    let mut by_month: BTreeMap<u32, u64> = BTreeMap::new();
    for record in sliced.records() {
        *by_month.entry(record.month()).or_insert(0) += record.sales_amount;
    }

    SliceResult {
        filter: filter.clone(),
        summary: Summary::of(&sliced),
        monthly: by_month
            .into_iter()
            .map(|(month, total)| MonthlySales { month, total })
            .collect(),
    }
}

#[cfg(test)]
#[path = "slice_test.rs"]
mod tests;
