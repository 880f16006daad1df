//! Sales dataset loading and filtered views
//!
//! [`SalesDataset`] is the session's data-access object: it loads the fact
//! table once from a CSV file and is passed explicitly to query functions.
//! It is immutable for the session; queries derive borrowed [`FactView`]
//! subsets from it and never mutate the underlying records.

use crate::error::{CoreError, CoreResult};
use crate::fact::FactRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::path::Path;

/// Required CSV column order
pub const EXPECTED_HEADER: [&str; 4] = ["date", "product", "region", "sales_amount"];

/// The loaded sales fact table
#[derive(Debug, Clone)]
pub struct SalesDataset {
    records: Vec<FactRecord>,
}

impl SalesDataset {
    /// Build a dataset from in-memory records
    pub fn from_records(records: Vec<FactRecord>) -> Self {
        Self { records }
    }

    /// Load the fact table from a CSV file
    ///
    /// The header row is required and must match [`EXPECTED_HEADER`].
    /// Dates are ISO (`YYYY-MM-DD`); a trailing time component, as pandas
    /// emits for midnight timestamps, is tolerated and discarded.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::DatasetNotFound {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        if headers.iter().collect::<Vec<_>>() != EXPECTED_HEADER {
            return Err(CoreError::DatasetHeader {
                path: path.display().to_string(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            records.push(parse_row(&row, path, line)?);
        }

        log::debug!(
            "Loaded {} fact records from {}",
            records.len(),
            path.display()
        );
        Ok(Self { records })
    }

    /// Write the fact table to a CSV file, overwriting any existing file
    pub fn write_csv(&self, path: &Path) -> CoreResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(EXPECTED_HEADER)?;
        for r in &self.records {
            writer.write_record([
                r.date.format("%Y-%m-%d").to_string(),
                r.product.clone(),
                r.region.clone(),
                r.sales_amount.to_string(),
            ])?;
        }
        writer.flush().map_err(CoreError::Io)?;
        Ok(())
    }

    /// All records in load order
    pub fn records(&self) -> &[FactRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct years present in the dataset
    pub fn years(&self) -> Vec<i32> {
        let set: BTreeSet<i32> = self.records.iter().map(|r| r.year()).collect();
        set.into_iter().collect()
    }

    /// The most recent year present, if any
    pub fn latest_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year()).max()
    }

    /// Sorted distinct product codes
    pub fn products(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.product.as_str()))
    }

    /// Sorted distinct regions
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Sum of sales over the whole dataset
    pub fn total_sales(&self) -> u64 {
        self.records.iter().map(|r| r.sales_amount).sum()
    }

    /// Mean sale over the whole dataset (0.0 when empty)
    pub fn mean_sales(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.total_sales() as f64 / self.records.len() as f64
        }
    }

    /// View over every record
    pub fn view(&self) -> FactView<'_> {
        FactView {
            records: self.records.iter().collect(),
        }
    }

    /// View restricted to a single year
    pub fn view_for_year(&self, year: i32) -> FactView<'_> {
        FactView {
            records: self.records.iter().filter(|r| r.year() == year).collect(),
        }
    }
}

fn parse_row(row: &csv::StringRecord, path: &Path, line: u64) -> CoreResult<FactRecord> {
    let field = |idx: usize| -> CoreResult<&str> {
        row.get(idx).ok_or_else(|| CoreError::RowParse {
            path: path.display().to_string(),
            line,
            message: format!("expected {} columns, found {}", EXPECTED_HEADER.len(), row.len()),
        })
    };

    let raw_date = field(0)?;
    // pandas writes midnight timestamps as "2024-03-05 00:00:00"
    let date_part = raw_date.split_whitespace().next().unwrap_or(raw_date);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| CoreError::RowParse {
        path: path.display().to_string(),
        line,
        message: format!("invalid date '{}': {}", raw_date, e),
    })?;

    let product = field(1)?.to_string();
    let region = field(2)?.to_string();

    let raw_amount = field(3)?;
    let sales_amount = raw_amount.parse::<u64>().map_err(|e| CoreError::RowParse {
        path: path.display().to_string(),
        line,
        message: format!("invalid sales_amount '{}': {}", raw_amount, e),
    })?;

    Ok(FactRecord {
        date,
        product,
        region,
        sales_amount,
    })
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().map(String::from).collect()
}

/// A read-only, borrowed subset of the fact table
///
/// Views are recomputed per interaction and only ever narrow: every derived
/// view is a subset of the view it was produced from.
#[derive(Debug, Clone)]
pub struct FactView<'a> {
    records: Vec<&'a FactRecord>,
}

impl<'a> FactView<'a> {
    /// Records in this view, in dataset order
    pub fn records(&self) -> &[&'a FactRecord] {
        &self.records
    }

    /// Number of records in the view
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the view is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive a narrower view keeping records matching the predicate
    pub fn retain(&self, mut predicate: impl FnMut(&FactRecord) -> bool) -> FactView<'a> {
        FactView {
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| predicate(r))
                .collect(),
        }
    }

    /// Sum of sales over the view
    pub fn total_sales(&self) -> u64 {
        self.records.iter().map(|r| r.sales_amount).sum()
    }

    /// Mean sale over the view (0.0 when empty)
    pub fn mean_sales(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.total_sales() as f64 / self.records.len() as f64
        }
    }

    /// Sorted distinct product codes in the view
    pub fn products(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.product.as_str()))
    }

    /// Sorted distinct regions in the view
    pub fn regions(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.region.as_str()))
    }

    /// Sorted distinct quarters (1-4) in the view
    pub fn quarters(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.records.iter().map(|r| r.quarter()).collect();
        set.into_iter().collect()
    }

    /// Sorted distinct months (1-12) in the view
    pub fn months(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.records.iter().map(|r| r.month()).collect();
        set.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
