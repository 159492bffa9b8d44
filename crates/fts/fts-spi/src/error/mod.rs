//! Error module containing error types and result aliases

mod fts_error;

pub use fts_error::{FtsError, Result};
