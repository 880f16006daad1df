//! Pivot operation: re-express the view as a two-dimensional cross-tab
//!
//! The index and column dimensions are chosen from {region, product, month,
//! quarter} and must differ; missing combinations are filled with zero.
//! `pivot(a, b).transpose()` equals `pivot(b, a)`.

use crate::error::{OlapError, OlapResult};
use crate::types::{CrossTab, Dimension};
use cb_core::FactView;

/// Cross-tabulate sum-of-sales with the given index and column dimensions
pub fn pivot(view: &FactView<'_>, index: Dimension, columns: Dimension) -> OlapResult<CrossTab> {
    if index == columns {
        return Err(OlapError::PivotAxesEqual { dim: index });
    }
    Ok(CrossTab::build(view, index, columns))
}

#[cfg(test)]
#[path = "pivot_test.rs"]
mod tests;
