//! Forecast accuracy metrics
//!
//! Standard metrics for evaluating point forecasts against held-out data.

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between predictions and actual values.
/// Lower is better. Same scale as the data.
///
/// # Example
///
/// ```rust
/// use fts_core::utils::metrics::mae;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.1, 2.2, 2.9];
/// let error = mae(&actual, &predicted);
/// assert!(error < 0.2);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Mean Squared Error (MSE)
///
/// Average of squared differences. Penalizes large errors more heavily.
/// Lower is better.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
///
/// Square root of MSE. Same scale as the data.
/// Lower is better.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

/// Mean Absolute Percentage Error (MAPE)
///
/// Average of absolute percentage errors. Scale-independent.
/// Lower is better. Near-zero actual values are skipped.
///
/// # Returns
///
/// Value between 0 and infinity (as a decimal, not percentage).
pub fn mape(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| a.abs() > 1e-10)
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();

    sum / actual.len() as f64
}

/// Theil's U statistic
///
/// Ratio of the forecast RMSE to the RMSE of the naive random-walk forecast
/// over the same points. Values below 1 beat the naive forecast; a forecast
/// that always repeats the previous actual value scores exactly 1.
///
/// Requires at least two points; returns NaN otherwise, or when the actual
/// series is constant (the naive error is zero).
pub fn theil_u(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.len() < 2 {
        return f64::NAN;
    }

    let n = actual.len();
    let forecast_sse: f64 = (1..n).map(|i| (predicted[i] - actual[i]).powi(2)).sum();
    let naive_sse: f64 = (1..n).map(|i| (actual[i - 1] - actual[i]).powi(2)).sum();

    if naive_sse <= 0.0 {
        return f64::NAN;
    }

    (forecast_sse / naive_sse).sqrt()
}
