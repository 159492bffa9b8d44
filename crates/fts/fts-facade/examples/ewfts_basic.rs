//! Basic example demonstrating the exponentially weighted fuzzy time series model
//!
//! Run with: cargo run --example ewfts_basic -p fts-facade

use fts_facade::prelude::*;
use fts_facade::utils::metrics::{mae, rmse};

/// Five triangular sets covering the value range [0, 60]
fn build_partition() -> fts_facade::Result<Partition> {
    Partition::new(vec![
        Box::new(TriangularSet::new("very_low", 0.0, 10.0, 20.0)?),
        Box::new(TriangularSet::new("low", 10.0, 20.0, 30.0)?),
        Box::new(TriangularSet::new("medium", 20.0, 30.0, 40.0)?),
        Box::new(TriangularSet::new("high", 30.0, 40.0, 50.0)?),
        Box::new(TriangularSet::new("very_high", 40.0, 50.0, 60.0)?),
    ])
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let partition = build_partition()?;

    // Oscillating sample series
    let data: Vec<f64> = (0..80)
        .map(|i| 30.0 + 20.0 * (i as f64 * 0.3).sin())
        .collect();
    let train = &data[..60];
    let test = &data[60..];

    println!("=== Exponentially Weighted FTS Example ===\n");
    println!("Training on {} points, testing on {}\n", train.len(), test.len());

    // 1. Train with the default decay factor (1.1)
    let mut model = ExponentiallyWeightedFts::with_defaults(partition);
    model.train(train)?;
    println!(
        "1. Learned {} rules over {} transitions",
        model.rule_count(),
        model.total_rule_length()
    );
    println!("{}", model);

    // 2. One-step forecasts over the test segment
    let predictions = model.forecast(test)?;
    let actual = &test[1..];
    let predicted = &predictions[..predictions.len() - 1];
    println!("2. One-step forecasts");
    println!("   MAE:  {:.3}", mae(actual, predicted));
    println!("   RMSE: {:.3}\n", rmse(actual, predicted));

    // 3. Multi-step forecast from the end of the series
    let ahead = model.forecast_ahead(&data, 5)?;
    println!("3. Next 5 values: {:?}\n", ahead);

    // 4. Explain a single forecast
    let explained = model.explain(&test[..1])?;
    for point in &explained {
        match &point.resolution {
            Resolution::Rule { consequents, .. } => println!(
                "4. {} -> rule over {:?} gives {:.3}",
                point.antecedent, consequents, point.forecast
            ),
            Resolution::Naive => println!(
                "4. {} -> no rule, centroid fallback gives {:.3}",
                point.antecedent, point.forecast
            ),
        }
    }

    // 5. A steeper decay reacts faster to recent transitions
    let mut reactive =
        ExponentiallyWeightedFts::new(build_partition()?, EwftsConfig::new(1.5)?);
    reactive.train(train)?;
    let reactive_predictions = reactive.forecast(test)?;
    println!(
        "\n5. Decay 1.5 MAE: {:.3}",
        mae(actual, &reactive_predictions[..reactive_predictions.len() - 1])
    );

    Ok(())
}
