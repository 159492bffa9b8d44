//! Antecedent-indexed storage for relationship groups

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flrg::ExponentiallyWeightedFlrg;

/// Mapping from antecedent label to its relationship group
///
/// Populated by the aggregation step during training and read-only during
/// forecasting. Keys are unique; insertion order carries no meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupStore {
    groups: HashMap<String, ExponentiallyWeightedFlrg>,
}

impl GroupStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups (distinct antecedents)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no group has been stored
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of consequent entries across all groups
    pub fn total_len(&self) -> usize {
        self.groups.values().map(|g| g.len()).sum()
    }

    /// Look up the group for an antecedent label
    pub fn get(&self, antecedent: &str) -> Option<&ExponentiallyWeightedFlrg> {
        self.groups.get(antecedent)
    }

    /// Mutable lookup, used while folding transitions in
    pub fn get_mut(&mut self, antecedent: &str) -> Option<&mut ExponentiallyWeightedFlrg> {
        self.groups.get_mut(antecedent)
    }

    /// True if a group exists for the antecedent label
    pub fn contains(&self, antecedent: &str) -> bool {
        self.groups.contains_key(antecedent)
    }

    /// Insert a group, keyed by its antecedent; replaces any existing group
    /// with the same antecedent
    pub fn insert(&mut self, group: ExponentiallyWeightedFlrg) {
        self.groups.insert(group.antecedent().to_string(), group);
    }

    /// Iterate the stored groups in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &ExponentiallyWeightedFlrg> {
        self.groups.values()
    }

    /// Remove all groups
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Drop every group's memoized weight vector
    pub fn reset_cached_weights(&mut self) {
        for group in self.groups.values_mut() {
            group.reset_cached_weights();
        }
    }

    /// Fold another store's groups into this one
    ///
    /// Groups for unseen antecedents are copied over; for shared antecedents
    /// the other group's consequents are appended after the existing ones, in
    /// their stored order, with unit counts.
    pub fn merge(&mut self, other: &GroupStore) {
        for group in other.groups.values() {
            match self.groups.get_mut(group.antecedent()) {
                Some(existing) => {
                    for consequent in group.consequents() {
                        existing.append(consequent.clone());
                    }
                }
                None => self.insert(group.clone()),
            }
        }
    }
}
