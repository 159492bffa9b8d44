//! Integration tests for the fts facade

use fts_facade::prelude::*;
use fts_facade::utils::metrics::{mae, theil_u};
use fts_facade::{aggregate, fuzzify, generate_recurrent_pairs, max_membership};

fn partition() -> Partition {
    Partition::new(vec![
        Box::new(TriangularSet::new("A0", 0.0, 10.0, 20.0).unwrap()),
        Box::new(TriangularSet::new("A1", 10.0, 20.0, 30.0).unwrap()),
        Box::new(TriangularSet::new("A2", 20.0, 30.0, 40.0).unwrap()),
    ])
    .unwrap()
}

#[test]
fn test_facade_exposes_full_workflow() {
    let series = vec![10.0, 20.0, 30.0, 20.0, 10.0, 20.0, 30.0];
    let partition = partition();

    // Collaborator pipeline, step by step
    let labels = fuzzify(&series, &partition);
    assert_eq!(labels, vec!["A0", "A1", "A2", "A1", "A0", "A1", "A2"]);

    let pairs = generate_recurrent_pairs(&labels);
    assert_eq!(pairs.len(), 6);

    let mut store = GroupStore::new();
    aggregate(&mut store, &pairs, 1.1).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("A1").unwrap().consequents(), &["A2", "A0", "A2"]);

    // Same pipeline through the model
    let mut model = ExponentiallyWeightedFts::with_defaults(partition);
    model.train(&series).unwrap();
    assert_eq!(model.rule_count(), 3);
    assert_eq!(
        model.store().get("A1").unwrap().consequents(),
        store.get("A1").unwrap().consequents()
    );
}

#[test]
fn test_forecast_is_weighted_average_of_midpoints() {
    let mut model = ExponentiallyWeightedFts::with_defaults(partition());
    model.train(&[10.0, 20.0, 30.0, 20.0, 10.0, 20.0, 30.0]).unwrap();

    // A1 observed consequents [A2, A0, A2]; raw weights [1, 1.1, 1.21]
    let expected = (30.0 * 1.0 + 10.0 * 1.1 + 30.0 * 1.21) / 3.31;
    let forecast = model.forecast(&[20.0]).unwrap();
    assert!((forecast[0] - expected).abs() < 1e-12);
}

#[test]
fn test_max_membership_and_fallback_agree() {
    let reference = partition();
    let mut model = ExponentiallyWeightedFts::new(
        partition(),
        EwftsConfig::default().with_clip_to_uod(false),
    );
    // Only the A0 -> A0 transition is learned
    model.train(&[10.0, 10.0]).unwrap();

    // 30.0 matches A2, which has no rule: forecast must be A2's centroid
    let matched = max_membership(30.0, &reference).unwrap();
    assert_eq!(matched.name(), "A2");
    assert_eq!(model.forecast(&[30.0]).unwrap(), vec![matched.centroid()]);
}

#[test]
fn test_error_paths_through_facade() {
    let model = ExponentiallyWeightedFts::with_defaults(partition());
    assert_eq!(model.forecast(&[1.0]), Err(FtsError::NotTrained));

    assert!(matches!(
        EwftsConfig::new(0.0),
        Err(FtsError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Partition::new(vec![]),
        Err(FtsError::InvalidParameter { .. })
    ));
}

#[test]
fn test_merge_through_facade() {
    let mut weekday = ExponentiallyWeightedFts::with_defaults(partition());
    weekday.train(&[10.0, 20.0, 10.0]).unwrap();

    let mut weekend = ExponentiallyWeightedFts::with_defaults(partition());
    weekend.train(&[20.0, 30.0, 30.0]).unwrap();

    weekday.merge(&weekend);
    assert_eq!(
        weekday.store().get("A1").unwrap().consequents(),
        &["A0", "A2"]
    );
    assert!(weekday.store().contains("A2"));
}

#[test]
fn test_evaluation_with_metrics() {
    let series: Vec<f64> = (0..120)
        .map(|i| 20.0 + 15.0 * (i as f64 * 0.5).sin())
        .collect();
    let train = &series[..100];
    let test = &series[100..];

    let mut model = ExponentiallyWeightedFts::with_defaults(partition());
    model.train(train).unwrap();

    let predictions = model.forecast(test).unwrap();
    let actual = &test[1..];
    let predicted = &predictions[..predictions.len() - 1];

    assert!(mae(actual, predicted).is_finite());
    assert!(theil_u(actual, predicted).is_finite());
}
