//! First-order fuzzy logical relationship

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single antecedent → consequent transition observed between two
/// consecutive fuzzified points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flr {
    /// Fuzzy set label observed at time t
    pub antecedent: String,
    /// Fuzzy set label observed at time t + 1
    pub consequent: String,
}

impl Flr {
    /// Create a relationship from an antecedent and consequent label
    pub fn new(antecedent: impl Into<String>, consequent: impl Into<String>) -> Self {
        Self {
            antecedent: antecedent.into(),
            consequent: consequent.into(),
        }
    }
}

impl fmt::Display for Flr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.antecedent, self.consequent)
    }
}
