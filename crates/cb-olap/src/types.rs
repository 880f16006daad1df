//! Shared query-layer types: dimensions, summaries, and cross-tabulations

use cb_core::{FactRecord, FactView};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A dimension of the fact table usable as a pivot axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Sales region
    Region,
    /// Product code
    Product,
    /// Calendar month (1-12)
    Month,
    /// Calendar quarter (1-4)
    Quarter,
}

impl Dimension {
    /// All pivotable dimensions
    pub const ALL: [Dimension; 4] = [
        Dimension::Region,
        Dimension::Product,
        Dimension::Month,
        Dimension::Quarter,
    ];

    /// Sortable key of a record along this dimension
    ///
    /// Month and quarter keys order numerically; categorical keys order
    /// lexically.
    pub(crate) fn key_of(self, record: &FactRecord) -> DimKey {
        match self {
            Dimension::Region => DimKey::Text(record.region.clone()),
            Dimension::Product => DimKey::Text(record.product.clone()),
            Dimension::Month => DimKey::Num(record.month()),
            Dimension::Quarter => DimKey::Num(record.quarter()),
        }
    }

    /// Display label for a key along this dimension
    pub(crate) fn label_of(self, key: &DimKey) -> String {
        match (self, key) {
            (Dimension::Quarter, DimKey::Num(q)) => format!("Q{}", q),
            (_, DimKey::Num(n)) => n.to_string(),
            (_, DimKey::Text(s)) => s.clone(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dimension::Region => "region",
            Dimension::Product => "product",
            Dimension::Month => "month",
            Dimension::Quarter => "quarter",
        };
        write!(f, "{}", s)
    }
}

/// Sortable value of a record along one dimension
///
/// A dimension is homogeneous, so cross-variant ordering never matters in
/// practice; the derived order puts numeric keys first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum DimKey {
    Num(u32),
    Text(String),
}

/// Sum / count / mean of sales over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of sales amounts
    pub total: u64,
    /// Number of records
    pub count: usize,
    /// Mean sales amount (0.0 when empty)
    pub mean: f64,
}

impl Summary {
    /// Compute the summary of a view
    pub fn of(view: &FactView<'_>) -> Self {
        Self {
            total: view.total_sales(),
            count: view.len(),
            mean: view.mean_sales(),
        }
    }

    /// The all-zero summary reported for empty results
    pub fn empty() -> Self {
        Self {
            total: 0,
            count: 0,
            mean: 0.0,
        }
    }
}

/// Aggregate statistics over the cells of a cross-tabulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellStats {
    pub max: u64,
    pub mean: f64,
    pub min: u64,
}

/// A two-dimensional sum-of-sales cross-tabulation
///
/// Rows and columns are the sorted distinct values of the two dimensions;
/// combinations absent from the data are filled with zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab {
    /// Dimension spanning the rows
    pub index_dim: Dimension,
    /// Dimension spanning the columns
    pub column_dim: Dimension,
    /// Row labels, in dimension order
    pub row_labels: Vec<String>,
    /// Column labels, in dimension order
    pub col_labels: Vec<String>,
    /// cells[row][col] = summed sales for that combination
    pub cells: Vec<Vec<u64>>,
}

impl CrossTab {
    /// Build a zero-filled cross-tabulation of sum-of-sales from a view
    pub fn build(view: &FactView<'_>, index_dim: Dimension, column_dim: Dimension) -> Self {
        let mut row_keys: BTreeSet<DimKey> = BTreeSet::new();
        let mut col_keys: BTreeSet<DimKey> = BTreeSet::new();
        let mut sums: BTreeMap<(DimKey, DimKey), u64> = BTreeMap::new();

        for record in view.records() {
            let row = index_dim.key_of(record);
            let col = column_dim.key_of(record);
            *sums.entry((row.clone(), col.clone())).or_insert(0) += record.sales_amount;
            row_keys.insert(row);
            col_keys.insert(col);
        }

        let cells = row_keys
            .iter()
            .map(|row| {
                col_keys
                    .iter()
                    .map(|col| {
                        sums.get(&(row.clone(), col.clone()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            index_dim,
            column_dim,
            row_labels: row_keys.iter().map(|k| index_dim.label_of(k)).collect(),
            col_labels: col_keys.iter().map(|k| column_dim.label_of(k)).collect(),
            cells,
        }
    }

    /// Cell value by row and column label
    pub fn get(&self, row: &str, col: &str) -> Option<u64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        Some(self.cells[r][c])
    }

    /// The same table with index and column axes swapped
    pub fn transpose(&self) -> Self {
        let cells = (0..self.col_labels.len())
            .map(|c| (0..self.row_labels.len()).map(|r| self.cells[r][c]).collect())
            .collect();
        Self {
            index_dim: self.column_dim,
            column_dim: self.index_dim,
            row_labels: self.col_labels.clone(),
            col_labels: self.row_labels.clone(),
            cells,
        }
    }

    /// Sum over all cells
    pub fn grand_total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    /// Whether the table has no cells
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() || self.col_labels.is_empty()
    }

    /// Max / mean / min over all cells (zeros when empty)
    pub fn cell_stats(&self) -> CellStats {
        let count = self.row_labels.len() * self.col_labels.len();
        if count == 0 {
            return CellStats {
                max: 0,
                mean: 0.0,
                min: 0,
            };
        }
        let values = self.cells.iter().flatten();
        CellStats {
            max: values.clone().copied().max().unwrap_or(0),
            mean: self.grand_total() as f64 / count as f64,
            min: values.copied().min().unwrap_or(0),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
