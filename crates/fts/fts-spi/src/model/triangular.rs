//! Triangular fuzzy set

use serde::{Deserialize, Serialize};

use crate::contract::FuzzySet;
use crate::error::{FtsError, Result};

/// Fuzzy set with a triangular membership function
///
/// Membership rises linearly from `lower` to 1.0 at `peak` and falls back to
/// zero at `upper`; the centroid is the peak. Degenerate shoulders
/// (`lower == peak` or `peak == upper`) are allowed and give a half-open
/// ramp, which is the usual shape for the outermost sets of a partition.
///
/// # Example
///
/// ```
/// use fts_spi::{FuzzySet, TriangularSet};
///
/// let set = TriangularSet::new("A1", 0.0, 10.0, 20.0).unwrap();
/// assert_eq!(set.centroid(), 10.0);
/// assert_eq!(set.membership(10.0), 1.0);
/// assert_eq!(set.membership(5.0), 0.5);
/// assert_eq!(set.membership(25.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangularSet {
    name: String,
    lower: f64,
    peak: f64,
    upper: f64,
}

impl TriangularSet {
    /// Create a triangular set
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `lower <= peak <= upper` and all
    /// three bounds are finite.
    pub fn new(name: impl Into<String>, lower: f64, peak: f64, upper: f64) -> Result<Self> {
        if !(lower.is_finite() && peak.is_finite() && upper.is_finite()) {
            return Err(FtsError::InvalidParameter {
                name: "bounds".to_string(),
                reason: "must be finite".to_string(),
            });
        }
        if !(lower <= peak && peak <= upper) {
            return Err(FtsError::InvalidParameter {
                name: "bounds".to_string(),
                reason: "must satisfy lower <= peak <= upper".to_string(),
            });
        }

        Ok(Self {
            name: name.into(),
            lower,
            peak,
            upper,
        })
    }

    /// Lower bound of the support
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Peak of the triangle
    pub fn peak(&self) -> f64 {
        self.peak
    }

    /// Upper bound of the support
    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl FuzzySet for TriangularSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn centroid(&self) -> f64 {
        self.peak
    }

    fn membership(&self, value: f64) -> f64 {
        if value < self.lower || value > self.upper {
            return 0.0;
        }
        if value == self.peak {
            return 1.0;
        }
        if value < self.peak {
            (value - self.lower) / (self.peak - self.lower)
        } else {
            (self.upper - value) / (self.upper - self.peak)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_shape() {
        let set = TriangularSet::new("A", 0.0, 10.0, 20.0).unwrap();

        assert_eq!(set.membership(-1.0), 0.0);
        assert_eq!(set.membership(0.0), 0.0);
        assert_eq!(set.membership(5.0), 0.5);
        assert_eq!(set.membership(10.0), 1.0);
        assert_eq!(set.membership(15.0), 0.5);
        assert_eq!(set.membership(20.0), 0.0);
        assert_eq!(set.membership(21.0), 0.0);
    }

    #[test]
    fn test_degenerate_shoulders() {
        let left = TriangularSet::new("lo", 0.0, 0.0, 10.0).unwrap();
        assert_eq!(left.membership(0.0), 1.0);
        assert_eq!(left.membership(5.0), 0.5);

        let right = TriangularSet::new("hi", 0.0, 10.0, 10.0).unwrap();
        assert_eq!(right.membership(10.0), 1.0);
        assert_eq!(right.membership(5.0), 0.5);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        assert!(TriangularSet::new("A", 10.0, 5.0, 20.0).is_err());
        assert!(TriangularSet::new("A", 0.0, 25.0, 20.0).is_err());
        assert!(TriangularSet::new("A", f64::NAN, 5.0, 10.0).is_err());
        assert!(TriangularSet::new("A", 0.0, 5.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_centroid_is_peak() {
        let set = TriangularSet::new("A", 2.0, 4.0, 9.0).unwrap();
        assert_eq!(set.centroid(), 4.0);
    }
}
