//! Error types for tree training, data loading and evaluation

use thiserror::Error;

/// Result type alias for gini-tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input has no header row")]
    MissingHeader,

    #[error("Header must name at least one feature and the label, got {0} column(s)")]
    HeaderTooShort(usize),

    #[error("Row {row}: expected {expected} fields, got {actual}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Column {column} is out of bounds for a row with {width} features")]
    ColumnOutOfBounds { column: usize, width: usize },

    #[error("Invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Predictions and labels are of different sizes: {labels} labels, {predictions} predictions")]
    LengthMismatch { labels: usize, predictions: usize },

    #[error("Label {0:?} is not one of the known classes")]
    UnknownLabel(String),

    #[error("Tree wasn't built yet")]
    NotFitted,
}
