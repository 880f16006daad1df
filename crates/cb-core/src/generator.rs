//! Synthetic sales dataset generator
//!
//! Produces a fact table with seasonal and categorical biases: dates are
//! uniform over a fixed window, product and region are uniform over small
//! fixed sets, and the sales amount is a uniform base scaled by seasonal,
//! product, and region multipliers.
//!
//! The generator takes an explicit optional seed so that a dataset can be
//! regenerated byte-identically.

use crate::dataset::SalesDataset;
use crate::error::{CoreError, CoreResult};
use crate::fact::FactRecord;
use chrono::{Datelike, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for dataset generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of fact records to produce
    pub records: usize,

    /// First date of the sampling window (inclusive)
    pub start: NaiveDate,

    /// Last date of the sampling window (inclusive)
    pub end: NaiveDate,

    /// Product codes sampled uniformly
    pub products: Vec<String>,

    /// Regions sampled uniformly
    pub regions: Vec<String>,

    /// RNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            records: 5000,
            start: NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date"),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
            products: ["A", "B", "C", "D"].map(String::from).to_vec(),
            regions: ["Norte", "Sur", "Este", "Oeste", "Centro"]
                .map(String::from)
                .to_vec(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> CoreResult<()> {
        if self.start > self.end {
            return Err(CoreError::InvalidDateWindow {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        if self.products.is_empty() {
            return Err(CoreError::EmptyDimensionSet {
                dimension: "product".to_string(),
            });
        }
        if self.regions.is_empty() {
            return Err(CoreError::EmptyDimensionSet {
                dimension: "region".to_string(),
            });
        }
        Ok(())
    }
}

/// Seasonal sales multiplier for a calendar month
///
/// Spring (Mar, Apr) and year-end (Nov, Dec) lift sales; Jun and Sep dip.
pub fn seasonal_multiplier(month: u32) -> f64 {
    match month {
        3 | 4 => 1.2,
        11 | 12 => 1.5,
        6 | 9 => 0.8,
        _ => 1.0,
    }
}

/// Product sales multiplier
pub fn product_multiplier(product: &str) -> f64 {
    match product {
        "A" => 1.1,
        "C" => 0.95,
        _ => 1.0,
    }
}

/// Region sales multiplier
pub fn region_multiplier(region: &str) -> f64 {
    match region {
        "Centro" => 1.3,
        "Sur" => 0.9,
        _ => 1.0,
    }
}

/// Generate a synthetic sales dataset
pub fn generate(config: &GeneratorConfig) -> CoreResult<SalesDataset> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let window_days = (config.end - config.start).num_days();
    let mut records = Vec::with_capacity(config.records);

    for _ in 0..config.records {
        let date = config.start + Duration::days(rng.random_range(0..=window_days));
        let product = config.products[rng.random_range(0..config.products.len())].clone();
        let region = config.regions[rng.random_range(0..config.regions.len())].clone();

        let base = rng.random_range(100..=300) as f64;
        let scaled = base
            * seasonal_multiplier(date.month())
            * product_multiplier(&product)
            * region_multiplier(&region);
        // Amounts are whole currency units; truncate rather than round
        let sales_amount = scaled.floor() as u64;

        records.push(FactRecord {
            date,
            product,
            region,
            sales_amount,
        });
    }

    Ok(SalesDataset::from_records(records))
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
