//! Exponentially weighted fuzzy time series forecaster

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use fts_spi::{
    FtsError, FtsModel, FuzzySet, Partition, PointForecast, Resolution, Result,
};

use crate::aggregation::{aggregate, generate_recurrent_pairs};
use crate::flrg::ExponentiallyWeightedFlrg;
use crate::fuzzification::{fuzzify, max_membership};
use crate::store::GroupStore;

/// Configuration for [`ExponentiallyWeightedFts`]
///
/// # Example
///
/// ```
/// use fts_core::EwftsConfig;
///
/// let config = EwftsConfig::new(1.2).unwrap().with_clip_to_uod(false);
/// assert_eq!(config.decay_factor(), 1.2);
/// assert!(!config.clip_to_uod());
///
/// assert!(EwftsConfig::new(-0.5).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EwftsConfig {
    /// Exponential base of the recency weighting, applied to every group
    /// created by one training run
    decay_factor: f64,
    /// Clamp forecast inputs into the trained value range before matching
    clip_to_uod: bool,
}

impl EwftsConfig {
    /// Default exponential decay base
    pub const DEFAULT_DECAY_FACTOR: f64 = 1.1;

    /// Create a configuration with the given decay factor
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `decay_factor` is not a positive finite
    /// number: a non-positive base makes the exponential weighting
    /// ill-defined.
    pub fn new(decay_factor: f64) -> Result<Self> {
        if !decay_factor.is_finite() || decay_factor <= 0.0 {
            return Err(FtsError::InvalidParameter {
                name: "decay_factor".to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }

        Ok(Self {
            decay_factor,
            clip_to_uod: true,
        })
    }

    /// Enable or disable clamping forecast inputs into the trained range
    pub fn with_clip_to_uod(mut self, clip: bool) -> Self {
        self.clip_to_uod = clip;
        self
    }

    /// Exponential base of the recency weighting
    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }

    /// Whether forecast inputs are clamped into the trained range
    pub fn clip_to_uod(&self) -> bool {
        self.clip_to_uod
    }
}

impl Default for EwftsConfig {
    fn default() -> Self {
        Self {
            decay_factor: Self::DEFAULT_DECAY_FACTOR,
            clip_to_uod: true,
        }
    }
}

/// First-order exponentially weighted fuzzy time series model
///
/// Training fuzzifies the series against the partition, extracts recurrent
/// antecedent → consequent transitions and folds them into a [`GroupStore`].
/// Forecasting matches each input to its best fuzzy set and returns the
/// recency-weighted average of the midpoints of the consequents observed for
/// that set, falling back to the matched set's own centroid when no rule
/// exists.
///
/// # Example
///
/// ```
/// use fts_core::prelude::*;
///
/// let partition = Partition::new(vec![
///     Box::new(TriangularSet::new("low", 0.0, 10.0, 20.0)?),
///     Box::new(TriangularSet::new("mid", 10.0, 20.0, 30.0)?),
///     Box::new(TriangularSet::new("high", 20.0, 30.0, 40.0)?),
/// ])?;
///
/// let mut model = ExponentiallyWeightedFts::with_defaults(partition);
/// model.train(&[12.0, 19.0, 27.0, 22.0, 14.0, 21.0, 29.0])?;
///
/// let forecast = model.forecast(&[18.0])?;
/// assert_eq!(forecast.len(), 1);
/// # Ok::<(), fts_core::FtsError>(())
/// ```
#[derive(Debug)]
pub struct ExponentiallyWeightedFts {
    config: EwftsConfig,
    partition: Partition,
    store: GroupStore,
    /// Universe of discourse observed during training: (min, max)
    bounds: Option<(f64, f64)>,
    trained: bool,
}

impl ExponentiallyWeightedFts {
    /// Create an untrained model over a partition
    pub fn new(partition: Partition, config: EwftsConfig) -> Self {
        Self {
            config,
            partition,
            store: GroupStore::new(),
            bounds: None,
            trained: false,
        }
    }

    /// Create an untrained model with the default configuration
    pub fn with_defaults(partition: Partition) -> Self {
        Self::new(partition, EwftsConfig::default())
    }

    /// Iterated multi-step forecast
    ///
    /// Produces `steps` values by feeding each one-step forecast back in as
    /// the next input, starting from the last point of `series`.
    pub fn forecast_ahead(&self, series: &[f64], steps: usize) -> Result<Vec<f64>> {
        if !self.trained {
            return Err(FtsError::NotTrained);
        }
        let last = match series.last() {
            Some(&value) => value,
            None => {
                return Err(FtsError::InsufficientData {
                    required: 1,
                    actual: 0,
                })
            }
        };

        let mut out = Vec::with_capacity(steps);
        let mut current = last;
        for _ in 0..steps {
            current = self.forecast_value(current)?;
            out.push(current);
        }
        Ok(out)
    }

    /// Per-point forecast diagnostics
    ///
    /// Returns, for each input point, the matched antecedent label, the rule
    /// resolution (or the naive fallback), and the forecast value. Purely
    /// observational: the values agree with [`FtsModel::forecast`].
    pub fn explain(&self, series: &[f64]) -> Result<Vec<PointForecast>> {
        if !self.trained {
            return Err(FtsError::NotTrained);
        }
        series.iter().map(|&x| self.explain_value(x)).collect()
    }

    /// Fold another model's rule base into this one
    ///
    /// See [`GroupStore::merge`]; the partition, configuration and trained
    /// bounds of `self` are kept.
    pub fn merge(&mut self, other: &Self) {
        self.store.merge(&other.store);
    }

    /// Number of rules (distinct antecedents)
    pub fn rule_count(&self) -> usize {
        self.store.len()
    }

    /// Total number of consequent entries across all rules
    pub fn total_rule_length(&self) -> usize {
        self.store.total_len()
    }

    /// Drop every rule's memoized weight vector
    pub fn reset_cached_weights(&mut self) {
        self.store.reset_cached_weights();
    }

    /// The learned rule base
    pub fn store(&self) -> &GroupStore {
        &self.store
    }

    /// The fuzzy set partition this model forecasts over
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The model configuration
    pub fn config(&self) -> &EwftsConfig {
        &self.config
    }

    /// Value range observed during training, if trained
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    fn clip(&self, value: f64) -> f64 {
        match self.bounds {
            Some((min, max)) if self.config.clip_to_uod => value.clamp(min, max),
            _ => value,
        }
    }

    fn match_set(&self, value: f64) -> Result<&dyn FuzzySet> {
        max_membership(self.clip(value), &self.partition)
            .ok_or_else(|| FtsError::InvalidData("partition has no fuzzy sets".to_string()))
    }

    /// Centroid of each consequent's fuzzy set, in stored order
    fn rule_midpoints(&self, group: &ExponentiallyWeightedFlrg) -> Result<Vec<f64>> {
        group
            .consequents()
            .iter()
            .map(|label| {
                self.partition.centroid_of(label).ok_or_else(|| {
                    FtsError::InvalidData(format!(
                        "consequent '{}' does not resolve in the partition",
                        label
                    ))
                })
            })
            .collect()
    }

    fn forecast_value(&self, value: f64) -> Result<f64> {
        let set = self.match_set(value)?;
        match self.store.get(set.name()) {
            None => {
                trace!(antecedent = set.name(), "no rule, naive fallback");
                Ok(set.centroid())
            }
            Some(group) => {
                let midpoints = self.rule_midpoints(group)?;
                let weights = group.weights();
                Ok(midpoints.iter().zip(&weights).map(|(m, w)| m * w).sum())
            }
        }
    }

    fn explain_value(&self, value: f64) -> Result<PointForecast> {
        let set = self.match_set(value)?;
        let antecedent = set.name().to_string();

        match self.store.get(set.name()) {
            None => Ok(PointForecast {
                input: value,
                antecedent,
                resolution: Resolution::Naive,
                forecast: set.centroid(),
            }),
            Some(group) => {
                let midpoints = self.rule_midpoints(group)?;
                let weights = group.weights();
                let forecast = midpoints.iter().zip(&weights).map(|(m, w)| m * w).sum();

                Ok(PointForecast {
                    input: value,
                    antecedent,
                    resolution: Resolution::Rule {
                        consequents: group.consequents().to_vec(),
                        midpoints,
                        weights,
                    },
                    forecast,
                })
            }
        }
    }
}

impl FtsModel for ExponentiallyWeightedFts {
    fn train(&mut self, series: &[f64]) -> Result<()> {
        if series.len() < 2 {
            return Err(FtsError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }
        if series.iter().any(|x| !x.is_finite()) {
            return Err(FtsError::InvalidData(
                "training series contains non-finite values".to_string(),
            ));
        }

        // Retraining restarts the rule base from scratch
        self.store.clear();
        self.trained = false;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &x in series {
            min = min.min(x);
            max = max.max(x);
        }
        self.bounds = Some((min, max));

        let labels = fuzzify(series, &self.partition);
        let pairs = generate_recurrent_pairs(&labels);
        aggregate(&mut self.store, &pairs, self.config.decay_factor)?;
        self.trained = true;

        debug!(
            rules = self.store.len(),
            transitions = pairs.len(),
            "trained EWFTS model"
        );
        Ok(())
    }

    fn forecast(&self, series: &[f64]) -> Result<Vec<f64>> {
        if !self.trained {
            return Err(FtsError::NotTrained);
        }
        series.iter().map(|&x| self.forecast_value(x)).collect()
    }

    fn is_trained(&self) -> bool {
        self.trained
    }
}

impl fmt::Display for ExponentiallyWeightedFts {
    /// One rule per line, sorted by the antecedent set's centroid
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EWFTS:")?;

        let mut groups: Vec<&ExponentiallyWeightedFlrg> = self.store.iter().collect();
        groups.sort_by(|a, b| {
            let ca = self.partition.centroid_of(a.antecedent());
            let cb = self.partition.centroid_of(b.antecedent());
            match (ca, cb) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
            .then_with(|| a.antecedent().cmp(b.antecedent()))
        });

        for group in groups {
            writeln!(f, "{}", group)?;
        }
        Ok(())
    }
}
