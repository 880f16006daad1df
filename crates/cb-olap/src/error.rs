//! Error types for cb-olap

use crate::types::Dimension;
use thiserror::Error;

/// Query layer error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OlapError {
    /// Q001: A dice membership filter has no selected values
    #[error("[Q001] Insufficient selection: no {dimension} values selected")]
    EmptySelection { dimension: &'static str },

    /// Q002: Pivot index and column dimensions are the same
    #[error("[Q002] Pivot index and column dimensions must differ (both are '{dim}')")]
    PivotAxesEqual { dim: Dimension },
}

/// Result type alias for OlapError
pub type OlapResult<T> = Result<T, OlapError>;
