//! Per-point forecast diagnostics

use serde::{Deserialize, Serialize};

/// How a single forecast value was resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// A learned rule fired: the forecast is the weighted average of the
    /// consequent midpoints
    Rule {
        /// Consequent labels in observation order
        consequents: Vec<String>,
        /// Centroid of each consequent's fuzzy set, aligned with `consequents`
        midpoints: Vec<f64>,
        /// Normalized recency weights, aligned with `consequents`
        weights: Vec<f64>,
    },
    /// No rule exists for the matched antecedent; the forecast fell back to
    /// the matched set's own centroid
    Naive,
}

/// Diagnostic record for one forecast point
///
/// Produced by the explain path only; the production forecast path computes
/// the same values without materializing these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointForecast {
    /// Raw input value
    pub input: f64,
    /// Best-matching antecedent label for the input
    pub antecedent: String,
    /// How the forecast was resolved
    pub resolution: Resolution,
    /// Final forecast value
    pub forecast: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_resolution() {
        let point = PointForecast {
            input: 12.0,
            antecedent: "A3".to_string(),
            resolution: Resolution::Naive,
            forecast: 15.0,
        };

        assert_eq!(point.resolution, Resolution::Naive);
        assert_eq!(point.forecast, 15.0);
    }

    #[test]
    fn test_rule_resolution_alignment() {
        let resolution = Resolution::Rule {
            consequents: vec!["A1".to_string(), "A2".to_string()],
            midpoints: vec![10.0, 20.0],
            weights: vec![0.4762, 0.5238],
        };

        if let Resolution::Rule {
            consequents,
            midpoints,
            weights,
        } = &resolution
        {
            assert_eq!(consequents.len(), midpoints.len());
            assert_eq!(consequents.len(), weights.len());
        } else {
            panic!("Expected Rule variant");
        }
    }
}
