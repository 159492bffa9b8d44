//! Model module containing data structures

mod explanation;
mod flr;
mod partition;
mod triangular;

pub use explanation::{PointForecast, Resolution};
pub use flr::Flr;
pub use partition::Partition;
pub use triangular::TriangularSet;
