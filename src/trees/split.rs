//! Best-split search over every feature column and every observed value.
use super::impurity::{gini_impurity, information_gain};
use super::question::Question;
use crate::data::dataset::{partition, unique_values, Row};
use tracing::trace;

/// The winning question and the information gain it achieves.
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub gain: f64,
    pub question: Question,
}

/// Finds the question with the highest information gain.
///
/// Candidates that leave either branch empty are skipped. A candidate whose
/// gain equals the best so far replaces it, so among equal gains the last
/// one enumerated wins. Returns `None` when no candidate gains more than zero.
pub fn find_best_split(rows: &[&Row]) -> Option<Split> {
    let first = rows.first()?;
    let num_features = first.features.len();
    let current_impurity = gini_impurity(rows);

    let mut best_gain = 0.0;
    let mut best_question: Option<Question> = None;

    for column in 0..num_features {
        for value in unique_values(rows, column) {
            let question = Question::new(column, value);
            let (true_rows, false_rows) = partition(rows, &question);

            if true_rows.is_empty() || false_rows.is_empty() {
                continue;
            }

            let gain = information_gain(&true_rows, &false_rows, current_impurity);
            trace!(column, value = %question.value, gain, "Split candidate");

            if gain >= best_gain {
                best_gain = gain;
                best_question = Some(question);
            }
        }
    }

    // A zero-gain candidate can still be recorded by `>=`; it is not a split.
    best_question
        .filter(|_| best_gain > 0.0)
        .map(|question| Split {
            gain: best_gain,
            question,
        })
}
