//! Recurrent relationship extraction and aggregation

use fts_spi::{Flr, Result};

use crate::flrg::ExponentiallyWeightedFlrg;
use crate::store::GroupStore;

/// Pair each label in a fuzzified sequence with its immediate successor
///
/// Repeated transitions are kept: a sequence of `n` labels yields exactly
/// `n - 1` relationships, and fewer than two labels yield none. The output
/// order matches the input order.
pub fn generate_recurrent_pairs(labels: &[String]) -> Vec<Flr> {
    labels
        .windows(2)
        .map(|w| Flr::new(w[0].clone(), w[1].clone()))
        .collect()
}

/// Fold observed transitions into the store
///
/// Walks the pairs in order. The first pair seen for an antecedent creates
/// its group with the given decay factor; every pair appends the consequent
/// to the antecedent's group. Pairs for different antecedents do not
/// interact — processing order only matters within a group, where it fixes
/// the recency weighting.
///
/// # Errors
///
/// Returns `InvalidParameter` if `decay` is not a positive finite number.
pub fn aggregate(store: &mut GroupStore, pairs: &[Flr], decay: f64) -> Result<()> {
    for pair in pairs {
        match store.get_mut(&pair.antecedent) {
            Some(group) => group.append(pair.consequent.clone()),
            None => {
                let mut group = ExponentiallyWeightedFlrg::new(pair.antecedent.clone(), decay)?;
                group.append(pair.consequent.clone());
                store.insert(group);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fts_spi::FtsError;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_pairs_from_short_sequences() {
        assert!(generate_recurrent_pairs(&[]).is_empty());
        assert!(generate_recurrent_pairs(&labels(&["A1"])).is_empty());
    }

    #[test]
    fn test_pairs_keep_order_and_repeats() {
        let pairs = generate_recurrent_pairs(&labels(&["A1", "A1", "A2", "A1", "A1"]));

        assert_eq!(
            pairs,
            vec![
                Flr::new("A1", "A1"),
                Flr::new("A1", "A2"),
                Flr::new("A2", "A1"),
                Flr::new("A1", "A1"),
            ]
        );
    }

    #[test]
    fn test_aggregate_groups_by_antecedent() {
        let pairs = generate_recurrent_pairs(&labels(&["A1", "A1", "A2", "A1", "A1"]));
        let mut store = GroupStore::new();
        aggregate(&mut store, &pairs, 1.1).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("A1").unwrap().consequents(), &["A1", "A2", "A1"]);
        assert_eq!(store.get("A2").unwrap().consequents(), &["A1"]);
    }

    #[test]
    fn test_aggregate_preserves_append_order_per_group() {
        let pairs = vec![
            Flr::new("A", "x"),
            Flr::new("B", "y"),
            Flr::new("A", "z"),
        ];
        let mut store = GroupStore::new();
        aggregate(&mut store, &pairs, 2.0).unwrap();

        assert_eq!(store.get("A").unwrap().consequents(), &["x", "z"]);
        assert_eq!(store.get("B").unwrap().consequents(), &["y"]);
    }

    #[test]
    fn test_aggregate_onto_existing_store() {
        let mut store = GroupStore::new();
        aggregate(&mut store, &[Flr::new("A", "x")], 1.1).unwrap();
        aggregate(&mut store, &[Flr::new("A", "y")], 1.1).unwrap();

        assert_eq!(store.get("A").unwrap().consequents(), &["x", "y"]);
    }

    #[test]
    fn test_aggregate_rejects_bad_decay() {
        let mut store = GroupStore::new();
        let result = aggregate(&mut store, &[Flr::new("A", "x")], -1.0);
        assert!(matches!(result, Err(FtsError::InvalidParameter { .. })));
    }

    #[test]
    fn test_aggregate_empty_pairs_is_noop() {
        let mut store = GroupStore::new();
        aggregate(&mut store, &[], 1.1).unwrap();
        assert!(store.is_empty());
    }
}
