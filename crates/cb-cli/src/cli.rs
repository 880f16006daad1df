//! CLI argument definitions using clap derive API

use cb_olap::{CategoryDim, Dimension, TimeLevel};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Cubero - OLAP slice/dice/roll-up/drill-down/pivot analysis over a sales fact table
#[derive(Parser, Debug)]
#[command(name = "cubero")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override dataset CSV path
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// Year filter (default: most recent year in the dataset)
    #[arg(short, long, global = true)]
    pub year: Option<i32>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a synthetic sales dataset CSV
    Generate(GenerateArgs),

    /// Whole-dataset KPIs and per-year record counts
    Overview(OverviewArgs),

    /// Slice: filter by product and/or region, with a monthly series
    Slice(SliceArgs),

    /// Dice: membership filters over products, regions, and quarters
    Dice(DiceArgs),

    /// Roll-up: aggregate sales to a coarser temporal level
    Rollup(RollupArgs),

    /// Drill-down: navigate from quarters to months to region/product detail
    Drilldown(DrilldownArgs),

    /// Pivot: cross-tabulate sales along two chosen dimensions
    Pivot(PivotArgs),
}

/// Output formats for query commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables and charts
    Table,
    /// JSON output
    Json,
}

/// Temporal aggregation levels
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg {
    Year,
    Quarter,
    Month,
}

impl From<LevelArg> for TimeLevel {
    fn from(value: LevelArg) -> Self {
        match value {
            LevelArg::Year => TimeLevel::Year,
            LevelArg::Quarter => TimeLevel::Quarter,
            LevelArg::Month => TimeLevel::Month,
        }
    }
}

/// Secondary roll-up dimensions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByArg {
    Product,
    Region,
}

impl From<ByArg> for CategoryDim {
    fn from(value: ByArg) -> Self {
        match value {
            ByArg::Product => CategoryDim::Product,
            ByArg::Region => CategoryDim::Region,
        }
    }
}

/// Pivotable dimensions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimArg {
    Region,
    Product,
    Month,
    Quarter,
}

impl From<DimArg> for Dimension {
    fn from(value: DimArg) -> Self {
        match value {
            DimArg::Region => Dimension::Region,
            DimArg::Product => Dimension::Product,
            DimArg::Month => Dimension::Month,
            DimArg::Quarter => Dimension::Quarter,
        }
    }
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records to generate (default from config, 5000)
    #[arg(short, long)]
    pub records: Option<usize>,

    /// RNG seed for reproducible datasets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// First date of the sampling window (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last date of the sampling window (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Output CSV path (default: the configured dataset path)
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the overview command
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the slice command
#[derive(Args, Debug)]
pub struct SliceArgs {
    /// Keep only this product
    #[arg(long)]
    pub product: Option<String>,

    /// Keep only this region
    #[arg(long)]
    pub region: Option<String>,

    /// Also list the matching records
    #[arg(long)]
    pub rows: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the dice command
#[derive(Args, Debug)]
pub struct DiceArgs {
    /// Products to keep (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub products: Vec<String>,

    /// Regions to keep (comma-separated)
    #[arg(long, value_delimiter = ',', required = true)]
    pub regions: Vec<String>,

    /// Quarters to keep (comma-separated, default: all four)
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 3, 4])]
    pub quarters: Vec<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the rollup command
#[derive(Args, Debug)]
pub struct RollupArgs {
    /// Temporal aggregation level
    #[arg(short, long, value_enum)]
    pub level: LevelArg,

    /// Secondary grouping dimension
    #[arg(short, long, value_enum)]
    pub by: Option<ByArg>,

    /// Number of top groups to report
    #[arg(short, long, default_value_t = 5)]
    pub top: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the drilldown command
#[derive(Args, Debug)]
pub struct DrilldownArgs {
    /// Quarter to drill into (1-4); omit for the full hierarchy
    #[arg(short, long)]
    pub quarter: Option<u32>,

    /// Month to drill into within the quarter
    #[arg(short, long, requires = "quarter")]
    pub month: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the pivot command
#[derive(Args, Debug)]
pub struct PivotArgs {
    /// Dimension spanning the rows
    #[arg(short, long, value_enum)]
    pub index: DimArg,

    /// Dimension spanning the columns
    #[arg(short, long, value_enum)]
    pub columns: DimArg,

    /// Export the table to XLSX (overwrites); with no value, the
    /// configured export path is used
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<String>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
