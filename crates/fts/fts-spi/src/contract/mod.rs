//! Contract module containing trait definitions for fuzzy time series operations

mod fuzzy_set;
mod model;

pub use fuzzy_set::FuzzySet;
pub use model::FtsModel;
