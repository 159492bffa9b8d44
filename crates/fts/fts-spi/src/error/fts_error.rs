//! Fuzzy time series error types
//!
//! Defines the standardized error type for all fuzzy time series operations.

use thiserror::Error;

/// Result type alias for fuzzy time series operations
pub type Result<T> = std::result::Result<T, FtsError>;

/// Errors that can occur during fuzzy time series operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been trained yet
    #[error("Model must be trained before forecasting")]
    NotTrained,

    /// Invalid input data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
