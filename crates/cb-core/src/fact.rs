//! Fact record representation and calendar attribute derivation
//!
//! A fact record is one sales transaction: a date, two categorical
//! dimensions (product, region), and a non-negative sales amount.
//! Calendar attributes (year, month, quarter, weekday) are pure functions
//! of the date and are derived on demand, never stored.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A single row of the sales fact table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    /// Transaction date
    pub date: NaiveDate,

    /// Product code (categorical)
    pub product: String,

    /// Sales region (categorical)
    pub region: String,

    /// Sales amount, whole currency units
    pub sales_amount: u64,
}

impl FactRecord {
    /// Create a new fact record
    pub fn new(date: NaiveDate, product: impl Into<String>, region: impl Into<String>, sales_amount: u64) -> Self {
        Self {
            date,
            product: product.into(),
            region: region.into(),
            sales_amount,
        }
    }

    /// Calendar year of the transaction
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Calendar quarter (1-4)
    pub fn quarter(&self) -> u32 {
        (self.date.month() - 1) / 3 + 1
    }

    /// English long weekday name (e.g. "Monday")
    pub fn weekday_name(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

#[cfg(test)]
#[path = "fact_test.rs"]
mod tests;
