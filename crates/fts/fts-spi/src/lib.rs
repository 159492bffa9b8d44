//! Fuzzy Time Series Service Provider Interface
//!
//! Defines the contracts, error types and shared models for the fuzzy time
//! series stack:
//!
//! - [`FuzzySet`]: the membership-function contract consumed by the models
//! - [`FtsModel`]: the train/forecast trait implemented by forecasting models
//! - [`FtsError`]: standardized error type for all fuzzy time series operations
//! - [`Result`]: convenient result type alias
//! - [`Partition`], [`Flr`], [`PointForecast`]: shared data models

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FtsModel, FuzzySet};
pub use error::{FtsError, Result};
pub use model::{Flr, Partition, PointForecast, Resolution, TriangularSet};
