//! Forecasting model contract
//!
//! Defines the core trait interface that fuzzy time series models implement.
//! It follows the train-forecast pattern: a single batch training call builds
//! the rule base, after which forecasting is a read-only operation.

use crate::error::Result;

/// Common trait for fuzzy time series forecasting models
///
/// `train` consumes a raw univariate series and rebuilds the model's rule
/// base from scratch; calling it again restarts the model on the new data.
/// `forecast` maps each input point to a one-step-ahead prediction, returning
/// a sequence with the same length and order as the input.
///
/// # Example
///
/// ```rust,ignore
/// use fts_spi::FtsModel;
///
/// fn train_and_forecast<M: FtsModel>(model: &mut M, series: &[f64]) -> fts_spi::Result<Vec<f64>> {
///     model.train(series)?;
///     model.forecast(series)
/// }
/// ```
pub trait FtsModel {
    /// Build the rule base from a raw training series
    ///
    /// # Arguments
    ///
    /// * `series` - Raw univariate training data
    ///
    /// # Returns
    ///
    /// `Ok(())` if training succeeds, `Err(FtsError)` otherwise
    fn train(&mut self, series: &[f64]) -> Result<()>;

    /// Produce a one-step-ahead forecast for each input point
    ///
    /// # Arguments
    ///
    /// * `series` - Raw values to forecast from
    ///
    /// # Returns
    ///
    /// One forecast per input point, in input order
    fn forecast(&self, series: &[f64]) -> Result<Vec<f64>>;

    /// Check if the model has been trained
    fn is_trained(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FtsError;

    /// Mock model that forecasts the mean of the training series for every
    /// input point
    struct MockMeanModel {
        mean: Option<f64>,
    }

    impl MockMeanModel {
        fn new() -> Self {
            Self { mean: None }
        }
    }

    impl FtsModel for MockMeanModel {
        fn train(&mut self, series: &[f64]) -> Result<()> {
            if series.is_empty() {
                return Err(FtsError::InsufficientData {
                    required: 1,
                    actual: 0,
                });
            }

            self.mean = Some(series.iter().sum::<f64>() / series.len() as f64);
            Ok(())
        }

        fn forecast(&self, series: &[f64]) -> Result<Vec<f64>> {
            match self.mean {
                Some(mean) => Ok(vec![mean; series.len()]),
                None => Err(FtsError::NotTrained),
            }
        }

        fn is_trained(&self) -> bool {
            self.mean.is_some()
        }
    }

    #[test]
    fn test_train_forecast_cycle() {
        let mut model = MockMeanModel::new();
        assert!(!model.is_trained());

        model.train(&[1.0, 2.0, 3.0]).unwrap();
        assert!(model.is_trained());

        let forecast = model.forecast(&[10.0, 20.0]).unwrap();
        assert_eq!(forecast, vec![2.0, 2.0]);
    }

    #[test]
    fn test_forecast_before_train_fails() {
        let model = MockMeanModel::new();
        let result = model.forecast(&[1.0]);
        assert_eq!(result, Err(FtsError::NotTrained));
    }

    #[test]
    fn test_train_rejects_empty_series() {
        let mut model = MockMeanModel::new();
        let result = model.train(&[]);
        assert_eq!(
            result,
            Err(FtsError::InsufficientData {
                required: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_forecast_length_matches_input() {
        let mut model = MockMeanModel::new();
        model.train(&[5.0, 7.0]).unwrap();

        for n in [0, 1, 4] {
            let input = vec![0.0; n];
            assert_eq!(model.forecast(&input).unwrap().len(), n);
        }
    }
}
