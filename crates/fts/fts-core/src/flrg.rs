//! Exponentially weighted fuzzy logical relationship groups

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

use fts_spi::{FtsError, Result};

/// Fuzzy logical relationship group (FLRG) with exponential recency weighting
///
/// Accumulates every consequent label observed to follow one antecedent, in
/// the exact order of observation, and derives a normalized weight vector
/// `decay^k / Σ decay^k` over the entries. With `decay > 1` the last-appended
/// (most recent) consequent carries the largest weight; repeated transitions
/// appear as duplicate entries and so accumulate weight through multiplicity.
///
/// The weight vector is memoized and recomputed lazily after any append.
///
/// # Example
///
/// ```
/// use fts_core::ExponentiallyWeightedFlrg;
///
/// let mut group = ExponentiallyWeightedFlrg::new("A1", 1.1).unwrap();
/// group.append("A1");
/// group.append("A2");
///
/// let weights = group.weights();
/// assert_eq!(weights.len(), 2);
/// assert!(weights[1] > weights[0]);
/// assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExponentiallyWeightedFlrg {
    /// Antecedent label identifying the group
    antecedent: String,
    /// Consequent labels in observation order, append-only
    consequents: Vec<String>,
    /// Accumulated observation count; fractional when appends carry
    /// non-unit counts
    count: f64,
    /// Exponential base of the recency weighting
    decay: f64,
    /// Memoized normalized weights aligned with `consequents`;
    /// `None` marks the cache dirty
    #[serde(skip)]
    cached_weights: RefCell<Option<Vec<f64>>>,
}

impl ExponentiallyWeightedFlrg {
    /// Create an empty group for an antecedent label
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `decay` is not a positive finite number.
    pub fn new(antecedent: impl Into<String>, decay: f64) -> Result<Self> {
        if !decay.is_finite() || decay <= 0.0 {
            return Err(FtsError::InvalidParameter {
                name: "decay".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }

        Ok(Self {
            antecedent: antecedent.into(),
            consequents: Vec::new(),
            count: 0.0,
            decay,
            cached_weights: RefCell::new(None),
        })
    }

    /// Append a consequent with unit count
    pub fn append(&mut self, consequent: impl Into<String>) {
        self.append_with_count(consequent, 1.0);
    }

    /// Append a consequent, adding `count` to the observation count
    ///
    /// Accepts any label, duplicates included: repetition is the mechanism
    /// that gives frequently recurring transitions more total weight.
    /// Invalidates the memoized weights.
    pub fn append_with_count(&mut self, consequent: impl Into<String>, count: f64) {
        self.consequents.push(consequent.into());
        self.count += count;
        self.cached_weights.replace(None);
    }

    /// Normalized recency weights aligned 1:1 with [`consequents`](Self::consequents)
    ///
    /// Entry `k` has raw weight `decay^k`, so the oldest entry gets weight 1
    /// and the most recent gets `decay^(n-1)`; the vector is normalized to
    /// sum to 1.0. An empty group yields an empty vector.
    pub fn weights(&self) -> Vec<f64> {
        if let Some(weights) = self.cached_weights.borrow().as_ref() {
            return weights.clone();
        }

        let weights = self.compute_weights();
        *self.cached_weights.borrow_mut() = Some(weights.clone());
        weights
    }

    fn compute_weights(&self) -> Vec<f64> {
        // Exponent range follows the discrete entry count, not the float
        // accumulator
        let n = self.consequents.len();
        if n == 0 {
            return Vec::new();
        }

        let raw: Vec<f64> = (0..n).map(|k| self.decay.powi(k as i32)).collect();
        let total: f64 = raw.iter().sum();
        raw.into_iter().map(|w| w / total).collect()
    }

    /// Drop the memoized weight vector, forcing recomputation on next access
    pub fn reset_cached_weights(&mut self) {
        self.cached_weights.replace(None);
    }

    /// Antecedent label identifying this group
    pub fn antecedent(&self) -> &str {
        &self.antecedent
    }

    /// Consequent labels in observation order
    pub fn consequents(&self) -> &[String] {
        &self.consequents
    }

    /// Accumulated observation count
    ///
    /// Equals [`len`](Self::len) only under unit-count appends.
    pub fn observation_count(&self) -> f64 {
        self.count
    }

    /// Exponential base of the recency weighting
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Number of consequent entries
    pub fn len(&self) -> usize {
        self.consequents.len()
    }

    /// True if no consequent has been appended yet
    pub fn is_empty(&self) -> bool {
        self.consequents.is_empty()
    }
}

impl fmt::Display for ExponentiallyWeightedFlrg {
    /// `A1 -> A1(0.302),A1(0.366),A2(0.332)` — one entry per occurrence,
    /// sorted by label, each with its own normalized weight
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weights = self.weights();
        let mut entries: Vec<(&str, f64)> = self
            .consequents
            .iter()
            .map(String::as_str)
            .zip(weights)
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "{} -> ", self.antecedent)?;
        for (i, (label, weight)) in entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}({:.3})", label, weight)?;
        }
        Ok(())
    }
}
