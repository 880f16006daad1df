//! Dice operation: simultaneous membership filters over three dimensions
//!
//! A dice intersects membership predicates over products, regions, and
//! quarters, then cross-tabulates the surviving records as a region×product
//! sum-of-sales matrix. An empty selection set on any dimension is rejected
//! up front ("insufficient selection") rather than producing an empty view.

use crate::error::{OlapError, OlapResult};
use crate::types::{CrossTab, Dimension, Summary};
use cb_core::FactView;
use serde::Serialize;

/// Membership filters for a dice operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiceSelection {
    /// Products to keep
    pub products: Vec<String>,
    /// Regions to keep
    pub regions: Vec<String>,
    /// Quarters (1-4) to keep
    pub quarters: Vec<u32>,
}

/// Result of a dice operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiceResult {
    /// Region×product sum-of-sales matrix over the diced records
    pub crosstab: CrossTab,
    /// Sum/count/mean over the diced records
    pub summary: Summary,
    /// Diced record count as a percentage of the year-filtered count
    pub percent_of_year: f64,
}

impl DiceResult {
    /// Whether the dice matched no records
    pub fn is_empty(&self) -> bool {
        self.summary.count == 0
    }
}

/// Dice the view and cross-tabulate the result
pub fn dice(view: &FactView<'_>, selection: &DiceSelection) -> OlapResult<DiceResult> {
    if selection.products.is_empty() {
        return Err(OlapError::EmptySelection {
            dimension: "product",
        });
    }
    if selection.regions.is_empty() {
        return Err(OlapError::EmptySelection {
            dimension: "region",
        });
    }
    if selection.quarters.is_empty() {
        return Err(OlapError::EmptySelection {
            dimension: "quarter",
        });
    }

    let diced = view.retain(|r| {
        selection.products.contains(&r.product)
            && selection.regions.contains(&r.region)
            && selection.quarters.contains(&r.quarter())
    });
    log::debug!("Dice kept {} of {} records", diced.len(), view.len());

    let percent_of_year = if view.is_empty() {
        0.0
    } else {
        diced.len() as f64 / view.len() as f64 * 100.0
    };

    Ok(DiceResult {
        crosstab: CrossTab::build(&diced, Dimension::Region, Dimension::Product),
        summary: Summary::of(&diced),
        percent_of_year,
    })
}

#[cfg(test)]
#[path = "dice_test.rs"]
mod tests;
