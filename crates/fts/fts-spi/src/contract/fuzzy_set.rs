//! Fuzzy set contract
//!
//! Defines the interface every fuzzy set must expose to the forecasting
//! models.

/// A labeled fuzzy set over the value domain
///
/// Each set carries a name (unique within its partition), a membership
/// function mapping raw values to degrees in `[0, 1]`, and a centroid — the
/// scalar representative value ("midpoint") used when the set appears as a
/// forecast consequent.
///
/// Implementations are expected to be immutable once constructed.
///
/// # Example
///
/// ```rust,ignore
/// use fts_spi::FuzzySet;
///
/// fn best_label<'a>(value: f64, sets: &'a [Box<dyn FuzzySet>]) -> Option<&'a str> {
///     sets.iter()
///         .max_by(|a, b| a.membership(value).total_cmp(&b.membership(value)))
///         .map(|s| s.name())
/// }
/// ```
pub trait FuzzySet {
    /// Label identifying this set within its partition
    fn name(&self) -> &str;

    /// Representative scalar value of the set
    fn centroid(&self) -> f64;

    /// Degree to which `value` belongs to this set, in `[0, 1]`
    fn membership(&self, value: f64) -> f64;
}
