//! Configuration types and parsing for cubero.yml
//!
//! The config file is optional; every field has a default so a project
//! directory with no `cubero.yml` behaves identically to one containing an
//! empty config.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional per-project config file
pub const CONFIG_FILE: &str = "cubero.yml";

/// Project configuration from cubero.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the fact-table CSV, relative to the project directory
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Default path for pivot spreadsheet exports
    #[serde(default = "default_export_path")]
    pub export_path: String,

    /// Dataset generator defaults
    #[serde(default)]
    pub generator: GeneratorDefaults,
}

/// Generator defaults, overridable per `cubero generate` invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorDefaults {
    /// Number of records to generate
    #[serde(default = "default_records")]
    pub records: usize,

    /// First date of the sampling window
    #[serde(default = "default_start")]
    pub start: NaiveDate,

    /// Last date of the sampling window
    #[serde(default = "default_end")]
    pub end: NaiveDate,

    /// Product codes to sample from
    #[serde(default = "default_products")]
    pub products: Vec<String>,

    /// Regions to sample from
    #[serde(default = "default_regions")]
    pub regions: Vec<String>,
}

fn default_dataset_path() -> String {
    "sales.csv".to_string()
}

fn default_export_path() -> String {
    "pivot.xlsx".to_string()
}

fn default_records() -> usize {
    5000
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
}

fn default_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date")
}

fn default_products() -> Vec<String> {
    ["A", "B", "C", "D"].map(String::from).to_vec()
}

fn default_regions() -> Vec<String> {
    ["Norte", "Sur", "Este", "Oeste", "Centro"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            export_path: default_export_path(),
            generator: GeneratorDefaults::default(),
        }
    }
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            records: default_records(),
            start: default_start(),
            end: default_end(),
            products: default_products(),
            regions: default_regions(),
        }
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Load configuration from a project directory, falling back to defaults
    /// when no `cubero.yml` is present
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    /// Dataset path resolved against the project directory
    pub fn dataset_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.dataset_path)
    }

    /// Export path resolved against the project directory
    pub fn export_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.export_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
