//! Fuzzy Time Series Facade
//!
//! High-level API for exponentially weighted fuzzy time series forecasting.
//! Re-exports all public types from the fts stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use fts_facade::prelude::*;
//!
//! let partition = Partition::new(vec![
//!     Box::new(TriangularSet::new("low", 0.0, 10.0, 20.0)?),
//!     Box::new(TriangularSet::new("mid", 10.0, 20.0, 30.0)?),
//!     Box::new(TriangularSet::new("high", 20.0, 30.0, 40.0)?),
//! ])?;
//!
//! let mut model = ExponentiallyWeightedFts::with_defaults(partition);
//! model.train(&[12.0, 19.0, 27.0, 22.0, 14.0, 21.0, 29.0])?;
//! let forecast = model.forecast(&[18.0])?;
//! assert_eq!(forecast.len(), 1);
//! # Ok::<(), fts_facade::FtsError>(())
//! ```

// Re-export everything from core (includes implementations)
pub use fts_core::*;

// Re-export from API for completeness (mostly overlaps with core re-exports)
#[allow(unused_imports)]
pub use fts_api::*;

// Explicit re-exports for documentation
pub use fts_core::prelude;
pub use fts_core::utils;
