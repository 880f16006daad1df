//! Runtime context for CLI commands

use anyhow::{Context, Result};
use cb_core::{Config, CoreError, FactView, SalesDataset};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Runtime context holding the loaded config, dataset, and active year
///
/// Constructed once per invocation and passed to the query functions; there
/// is no process-wide caching of the fact table.
pub struct RuntimeContext {
    /// Loaded project configuration
    pub config: Config,

    /// Loaded fact table
    pub dataset: SalesDataset,

    /// Active year filter
    pub year: i32,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let root = Path::new(&global.project_dir);

        let config =
            Config::load_from_dir(root).context("Failed to load project configuration")?;

        let data_path = match &global.data {
            Some(path) => PathBuf::from(path),
            None => config.dataset_path_absolute(root),
        };
        let dataset =
            SalesDataset::load(&data_path).context("Failed to load the sales dataset")?;
        log::debug!(
            "Loaded {} records from {}",
            dataset.len(),
            data_path.display()
        );

        let year = match global.year {
            Some(year) => year,
            None => dataset.latest_year().ok_or(CoreError::EmptyDataset {
                path: data_path.display().to_string(),
            })?,
        };

        Ok(Self {
            config,
            dataset,
            year,
            verbose: global.verbose,
        })
    }

    /// The year-filtered view all query modes operate on
    pub fn view(&self) -> FactView<'_> {
        self.dataset.view_for_year(self.year)
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
