//! Ordered fuzzy set partition

use std::collections::HashSet;
use std::fmt;

use crate::contract::FuzzySet;
use crate::error::{FtsError, Result};

/// An ordered collection of fuzzy sets covering the value domain
///
/// The partition is consumed read-only by the forecasting models: it is
/// iterated during fuzzification and used to resolve a consequent label back
/// to its centroid at forecast time. Construction validates that the
/// collection is non-empty, that set names are unique, and that every
/// centroid is finite; after that the partition is immutable.
pub struct Partition {
    sets: Vec<Box<dyn FuzzySet>>,
}

impl Partition {
    /// Create a partition from an ordered collection of fuzzy sets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty collection, `InvalidData` for
    /// duplicate set names or non-finite centroids.
    pub fn new(sets: Vec<Box<dyn FuzzySet>>) -> Result<Self> {
        if sets.is_empty() {
            return Err(FtsError::InvalidParameter {
                name: "sets".to_string(),
                reason: "partition requires at least one fuzzy set".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for set in &sets {
            if !set.centroid().is_finite() {
                return Err(FtsError::InvalidData(format!(
                    "fuzzy set '{}' has a non-finite centroid",
                    set.name()
                )));
            }
            if !seen.insert(set.name().to_string()) {
                return Err(FtsError::InvalidData(format!(
                    "duplicate fuzzy set name '{}'",
                    set.name()
                )));
            }
        }

        Ok(Self { sets })
    }

    /// Number of fuzzy sets in the partition
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Always false: construction rejects empty partitions
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterate the sets in construction order
    pub fn iter(&self) -> impl Iterator<Item = &dyn FuzzySet> {
        self.sets.iter().map(|s| s.as_ref())
    }

    /// Resolve a label to its fuzzy set
    pub fn get(&self, name: &str) -> Option<&dyn FuzzySet> {
        self.sets.iter().find(|s| s.name() == name).map(|s| s.as_ref())
    }

    /// Resolve a label to its centroid
    pub fn centroid_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|s| s.centroid())
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.sets.iter().map(|s| s.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriangularSet;

    fn boxed(name: &str, lower: f64, peak: f64, upper: f64) -> Box<dyn FuzzySet> {
        Box::new(TriangularSet::new(name, lower, peak, upper).unwrap())
    }

    #[test]
    fn test_construction_preserves_order() {
        let partition = Partition::new(vec![
            boxed("A0", 0.0, 5.0, 10.0),
            boxed("A1", 5.0, 10.0, 15.0),
            boxed("A2", 10.0, 15.0, 20.0),
        ])
        .unwrap();

        let names: Vec<&str> = partition.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A0", "A1", "A2"]);
        assert_eq!(partition.len(), 3);
        assert!(!partition.is_empty());
    }

    #[test]
    fn test_empty_partition_rejected() {
        let result = Partition::new(vec![]);
        assert!(matches!(
            result,
            Err(FtsError::InvalidParameter { name, .. }) if name == "sets"
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Partition::new(vec![
            boxed("A0", 0.0, 5.0, 10.0),
            boxed("A0", 5.0, 10.0, 15.0),
        ]);
        assert!(matches!(result, Err(FtsError::InvalidData(_))));
    }

    #[test]
    fn test_label_resolution() {
        let partition = Partition::new(vec![
            boxed("low", 0.0, 5.0, 10.0),
            boxed("high", 5.0, 10.0, 15.0),
        ])
        .unwrap();

        assert_eq!(partition.centroid_of("low"), Some(5.0));
        assert_eq!(partition.centroid_of("high"), Some(10.0));
        assert_eq!(partition.centroid_of("missing"), None);
        assert!(partition.get("low").is_some());
    }
}
