//! Error types for cb-core

use thiserror::Error;

/// Core error type for Cubero
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Dataset file not found
    #[error("[E001] Dataset file not found: {path}. Run `cubero generate` to create one.")]
    DatasetNotFound { path: String },

    /// E002: Dataset header row does not match the expected columns
    #[error("[E002] Invalid header in {path}: expected 'date,product,region,sales_amount', found '{found}'")]
    DatasetHeader { path: String, found: String },

    /// E003: A data row failed to parse
    #[error("[E003] Failed to parse {path} line {line}: {message}")]
    RowParse {
        path: String,
        line: u64,
        message: String,
    },

    /// E004: Dataset contains no records
    #[error("[E004] Dataset {path} contains no records")]
    EmptyDataset { path: String },

    /// E005: Generator date window is inverted
    #[error("[E005] Invalid generator date window: start {start} is after end {end}")]
    InvalidDateWindow { start: String, end: String },

    /// E006: Generator has no products or regions to sample from
    #[error("[E006] Generator config has an empty {dimension} set")]
    EmptyDimensionSet { dimension: String },

    /// E007: Failed to parse configuration file
    #[error("[E007] Failed to parse config: {message}")]
    ConfigParseError { message: String },

    /// E008: IO error
    #[error("[E008] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E009: IO error with file path context
    #[error("[E009] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// CSV framing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
