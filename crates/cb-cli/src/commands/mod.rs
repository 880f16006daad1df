//! CLI command implementations

pub(crate) mod dice;
pub(crate) mod drilldown;
pub(crate) mod generate;
pub(crate) mod overview;
pub(crate) mod pivot;
pub(crate) mod render;
pub(crate) mod rollup;
pub(crate) mod slice;
