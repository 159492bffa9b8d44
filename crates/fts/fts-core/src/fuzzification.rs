//! Maximum-membership fuzzification

use fts_spi::{FuzzySet, Partition};

/// Best-matching fuzzy set for a single value
///
/// Scans the partition in order and keeps the set with the greatest
/// membership degree; on ties the later set wins. Returns `None` only for an
/// empty partition, which [`Partition::new`] does not produce.
pub fn max_membership(value: f64, partition: &Partition) -> Option<&dyn FuzzySet> {
    let mut best: Option<(&dyn FuzzySet, f64)> = None;
    for set in partition.iter() {
        let mu = set.membership(value);
        match best {
            Some((_, best_mu)) if mu < best_mu => {}
            _ => best = Some((set, mu)),
        }
    }
    best.map(|(set, _)| set)
}

/// Fuzzify a raw series into best-matching set labels, one per point
pub fn fuzzify(series: &[f64], partition: &Partition) -> Vec<String> {
    series
        .iter()
        .filter_map(|&value| max_membership(value, partition).map(|s| s.name().to_string()))
        .collect()
}
