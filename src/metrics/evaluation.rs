//! Held-out evaluation of a fitted tree.
use super::confusion::{ClassificationMetrics, ConfusionMatrix};
use crate::data::dataset::{ClassCounts, Dataset};
use crate::error::{Result, TreeError};
use crate::trees::classifier::DecisionTreeClassifier;
use std::fmt::{self, Display, Formatter};
use tracing::info;

impl ClassificationMetrics for DecisionTreeClassifier {}

/// Outcome for a single test row.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub actual: String,
    pub predicted: String,
    pub counts: ClassCounts,
}

impl Prediction {
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }

    /// Leaf probabilities as whole percentages, truncated toward zero.
    pub fn percentages(&self) -> Vec<(&str, u32)> {
        self.counts
            .probabilities()
            .into_iter()
            .map(|(label, p)| (label, (p * 100.0).trunc() as u32))
            .collect()
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Actual: {}. Predicted: {{", self.actual)?;
        for (i, (label, percent)) in self.percentages().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}%", label, percent)?;
        }
        write!(f, "}}")
    }
}

#[derive(Clone, Debug)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    pub predictions: Vec<Prediction>,
}

impl Evaluation {
    /// `correct * 100 / total` in floating point, no truncation.
    pub fn accuracy_percent(&self) -> f64 {
        self.correct as f64 * 100.0 / self.total as f64
    }

    pub fn actual_labels(&self) -> Vec<String> {
        self.predictions.iter().map(|p| p.actual.clone()).collect()
    }

    pub fn predicted_labels(&self) -> Vec<String> {
        self.predictions.iter().map(|p| p.predicted.clone()).collect()
    }
}

/// Classifies every row of `dataset` and tallies how many labels the tree got right.
///
/// # Errors
///
/// Fails if the tree isn't fitted, if `dataset` is empty, or if a row is
/// too short for the tree.
pub fn evaluate(tree: &DecisionTreeClassifier, dataset: &Dataset) -> Result<Evaluation> {
    if dataset.is_empty() {
        return Err(TreeError::EmptyDataset);
    }

    let predictions = dataset
        .rows()
        .iter()
        .map(|row| -> Result<Prediction> {
            let counts = tree.classify_row(row)?;
            let predicted = counts.most_common().ok_or(TreeError::EmptyDataset)?;
            Ok(Prediction {
                actual: row.label.clone(),
                predicted: predicted.to_string(),
                counts: counts.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let correct = predictions.iter().filter(|p| p.is_correct()).count();
    let evaluation = Evaluation {
        correct,
        total: predictions.len(),
        predictions,
    };
    info!(
        correct = evaluation.correct,
        total = evaluation.total,
        accuracy = evaluation.accuracy_percent(),
        "Evaluated tree"
    );
    Ok(evaluation)
}

/// Confusion matrix of an evaluation, rows are actual labels.
pub fn confusion_matrix(
    tree: &DecisionTreeClassifier,
    evaluation: &Evaluation,
) -> Result<ConfusionMatrix> {
    tree.confusion_matrix(&evaluation.actual_labels(), &evaluation.predicted_labels())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Row;
    use approx::assert_relative_eq;

    fn header() -> Vec<String> {
        vec!["color".into(), "diameter".into(), "label".into()]
    }

    fn fitted() -> DecisionTreeClassifier {
        let rows = vec![
            Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Yellow".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
            Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
            Row::new(vec!["Yellow".into(), 3.0.into()], "Lemon"),
        ];
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&Dataset::new(header(), rows).unwrap()).unwrap();
        classifier
    }

    fn held_out() -> Dataset {
        let rows = vec![
            Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
            Row::new(vec!["Yellow".into(), 3.0.into()], "Lemon"),
        ];
        Dataset::new(header(), rows).unwrap()
    }

    #[test]
    fn test_evaluate() {
        let evaluation = evaluate(&fitted(), &held_out()).unwrap();
        // The yellow leaf holds {Apple: 1, Lemon: 1}, so the tie goes to Apple.
        assert_eq!(evaluation.correct, 2);
        assert_eq!(evaluation.total, 3);
        assert_relative_eq!(evaluation.accuracy_percent(), 200.0 / 3.0, epsilon = 1e-12);
        assert!(!evaluation.predictions[2].is_correct());
    }

    #[test]
    fn test_evaluate_empty() {
        let empty = Dataset::new(header(), vec![]).unwrap();
        assert!(matches!(
            evaluate(&fitted(), &empty),
            Err(TreeError::EmptyDataset)
        ));
    }

    #[test]
    fn test_evaluate_unfitted() {
        assert!(matches!(
            evaluate(&DecisionTreeClassifier::new(), &held_out()),
            Err(TreeError::NotFitted)
        ));
    }

    #[test]
    fn test_prediction_display() {
        let evaluation = evaluate(&fitted(), &held_out()).unwrap();
        assert_eq!(
            evaluation.predictions[2].to_string(),
            "Actual: Lemon. Predicted: {Apple: 50%, Lemon: 50%}"
        );
        assert_eq!(
            evaluation.predictions[1].to_string(),
            "Actual: Grape. Predicted: {Grape: 100%}"
        );
    }

    #[test]
    fn test_percentages_truncate() {
        let mut counts = ClassCounts::new();
        counts.add("a");
        counts.add("a");
        counts.add("b");
        let prediction = Prediction {
            actual: "a".into(),
            predicted: "a".into(),
            counts,
        };
        assert_eq!(prediction.percentages(), vec![("a", 66), ("b", 33)]);
        assert_eq!(
            prediction.to_string(),
            "Actual: a. Predicted: {a: 66%, b: 33%}"
        );
    }

    #[test]
    fn test_confusion_matrix_of_evaluation() {
        let tree = fitted();
        let evaluation = evaluate(&tree, &held_out()).unwrap();
        let matrix = confusion_matrix(&tree, &evaluation).unwrap();
        // classes: Apple, Grape, Lemon
        assert_eq!(matrix[(0, 0)], 1);
        assert_eq!(matrix[(1, 1)], 1);
        assert_eq!(matrix[(2, 0)], 1);
        assert_eq!(matrix.sum(), 3);
    }
}
