//! Gini impurity and information gain.
use crate::data::dataset::{ClassCounts, Row};

/// Gini impurity of a label distribution: `1 - sum(p(label)^2)`.
///
/// An empty distribution is treated as pure.
pub fn gini(counts: &ClassCounts) -> f64 {
    let total = counts.total() as f64;
    if total == 0.0 {
        return 0.0;
    }
    counts.iter().fold(1.0, |impurity, (_, count)| {
        let p_label = count as f64 / total;
        impurity - p_label * p_label
    })
}

pub fn gini_impurity(rows: &[&Row]) -> f64 {
    debug_assert!(!rows.is_empty(), "impurity of an empty row set");
    gini(&ClassCounts::from_rows(rows.iter().copied()))
}

/// Impurity of the parent minus the size-weighted impurity of both branches.
pub fn information_gain(true_rows: &[&Row], false_rows: &[&Row], current_impurity: f64) -> f64 {
    let total = (true_rows.len() + false_rows.len()) as f64;
    let weight_true = true_rows.len() as f64 / total;
    let weight_false = false_rows.len() as f64 / total;
    current_impurity
        - weight_true * gini_impurity(true_rows)
        - weight_false * gini_impurity(false_rows)
}
