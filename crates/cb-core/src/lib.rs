//! cb-core - Core library for Cubero
//!
//! This crate provides the sales fact-table model, calendar attribute
//! derivation, CSV loading and writing, the synthetic dataset generator,
//! and project configuration shared across all Cubero components.

pub mod config;
pub mod dataset;
pub mod error;
pub mod fact;
pub mod generator;

pub use config::{Config, GeneratorDefaults};
pub use dataset::{FactView, SalesDataset, EXPECTED_HEADER};
pub use error::{CoreError, CoreResult};
pub use fact::FactRecord;
pub use generator::{generate, GeneratorConfig};
