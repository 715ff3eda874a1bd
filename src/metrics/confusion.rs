use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::error::{Result, TreeError};

pub type ConfusionMatrix = DMatrix<usize>;

/// Sorted set of every label appearing in either sequence.
///
/// Row and column `i` of a [`ConfusionMatrix`] belong to `classes(..)[i]`.
pub fn classes(y_true: &[String], y_pred: &[String]) -> Vec<String> {
    y_true
        .iter()
        .chain(y_pred.iter())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn class_index(classes: &[String], label: &str) -> Result<usize> {
    classes
        .binary_search_by(|class| class.as_str().cmp(label))
        .map_err(|_| TreeError::UnknownLabel(label.to_string()))
}

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows are true labels and columns are predictions, both ordered as [`classes`].
    ///
    /// # Errors
    ///
    /// Fails if the two sequences differ in length.
    fn confusion_matrix(&self, y_true: &[String], y_pred: &[String]) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::LengthMismatch {
                labels: y_true.len(),
                predictions: y_pred.len(),
            });
        }

        let classes = classes(y_true, y_pred);
        let mut matrix = DMatrix::zeros(classes.len(), classes.len());

        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let matrix_row = class_index(&classes, y_t)?;
            let matrix_col = class_index(&classes, y_p)?;
            matrix[(matrix_row, matrix_col)] += 1;
        }

        Ok(matrix)
    }

    /// Computes the accuracy based on the true labels and predicted labels.
    ///
    /// # Returns
    ///
    /// The share of matching labels, between 0 and 1.
    ///
    /// # Errors
    ///
    /// Fails on mismatched lengths or when there are no labels at all.
    fn accuracy(&self, y_true: &[String], y_pred: &[String]) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }
}
