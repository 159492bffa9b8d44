//! Fuzzy Time Series Consumer API
//!
//! This crate provides consumer-facing types for the fuzzy time series
//! domain. Currently re-exports the SPI traits and types.
//!
//! # Re-exports
//!
//! All types from [`fts_spi`] are re-exported for convenience:
//!
//! - [`FtsModel`]: Core train/forecast trait
//! - [`FuzzySet`]: Fuzzy set contract
//! - [`FtsError`]: Error type
//! - [`Result`]: Result type alias
//! - [`Partition`], [`TriangularSet`], [`Flr`], [`PointForecast`]: data models

// Re-export all SPI types
pub use fts_spi::{
    Flr, FtsError, FtsModel, FuzzySet, Partition, PointForecast, Resolution, Result,
    TriangularSet,
};
