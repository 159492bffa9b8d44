//! Utility functions for evaluating fuzzy time series forecasts

pub mod metrics;

pub use metrics::*;
