//! Fuzzy Time Series Core Implementations
//!
//! This crate implements a first-order Exponentially Weighted Fuzzy Time
//! Series (EWFTS) forecaster, organized by concern:
//!
//! - [`flrg`]: exponentially weighted relationship groups
//! - [`store`]: the antecedent → group rule base
//! - [`aggregation`]: recurrent pair extraction and folding
//! - [`fuzzification`]: maximum-membership fuzzifiers
//! - [`model`]: the EWFTS forecaster and its configuration
//! - [`utils`]: forecast accuracy metrics
//!
//! ## Example
//!
//! ```rust
//! use fts_core::prelude::*;
//!
//! let partition = Partition::new(vec![
//!     Box::new(TriangularSet::new("low", 0.0, 10.0, 20.0)?),
//!     Box::new(TriangularSet::new("mid", 10.0, 20.0, 30.0)?),
//!     Box::new(TriangularSet::new("high", 20.0, 30.0, 40.0)?),
//! ])?;
//!
//! let mut model = ExponentiallyWeightedFts::with_defaults(partition);
//! model.train(&[12.0, 19.0, 27.0, 22.0, 14.0, 21.0, 29.0])?;
//!
//! let forecast = model.forecast(&[18.0, 25.0])?;
//! assert_eq!(forecast.len(), 2);
//! # Ok::<(), fts_core::FtsError>(())
//! ```

pub mod aggregation;
pub mod flrg;
pub mod fuzzification;
pub mod model;
pub mod store;
pub mod utils;

// Re-export from SPI
pub use fts_spi::{
    Flr, FtsError, FtsModel, FuzzySet, Partition, PointForecast, Resolution, Result,
    TriangularSet,
};

// Re-export implementations for convenience
pub use aggregation::{aggregate, generate_recurrent_pairs};
pub use flrg::ExponentiallyWeightedFlrg;
pub use fuzzification::{fuzzify, max_membership};
pub use model::{EwftsConfig, ExponentiallyWeightedFts};
pub use store::GroupStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::flrg::ExponentiallyWeightedFlrg;
    pub use crate::model::{EwftsConfig, ExponentiallyWeightedFts};
    pub use crate::store::GroupStore;
    pub use fts_spi::{
        Flr, FtsError, FtsModel, FuzzySet, Partition, PointForecast, Resolution, Result,
        TriangularSet,
    };
}
