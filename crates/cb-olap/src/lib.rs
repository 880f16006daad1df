//! cb-olap - Analytical query layer for Cubero
//!
//! Pure OLAP-style operations over an in-memory fact table view: slice,
//! dice, roll-up, drill-down, and pivot. Every function takes a
//! [`cb_core::FactView`] (already filtered to the session's year by the
//! caller) and returns a plain result struct with no rendering or I/O
//! dependency, so the whole layer is testable in isolation.

pub mod dice;
pub mod drilldown;
pub mod error;
pub mod pivot;
pub mod rollup;
pub mod slice;
pub mod types;

pub use dice::{dice, DiceResult, DiceSelection};
pub use drilldown::{drill, hierarchy, months_in_quarter, DrillNode, DrillResult};
pub use error::{OlapError, OlapResult};
pub use pivot::pivot;
pub use rollup::{rollup, CategoryDim, RollupGroup, RollupResult, TimeLevel};
pub use slice::{slice, MonthlySales, SliceFilter, SliceResult};
pub use types::{CellStats, CrossTab, Dimension, Summary};
