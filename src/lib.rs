//! # gini-tree
//!
//! `gini-tree` builds a binary decision tree classifier over tabular data whose
//! columns may be categorical or numeric. Splits are chosen by information gain
//! over Gini impurity; categorical columns split on equality and numeric columns
//! on a `>=` threshold. It also ships the glue to load a delimited file, split it
//! into training and testing sets and report accuracy.
//!
//! ## Example Usage
//!
//! ```rust
//! use gini_tree::data::dataset::{Dataset, Row};
//! use gini_tree::trees::classifier::DecisionTreeClassifier;
//!
//! let header = vec!["color".to_string(), "diameter".to_string(), "label".to_string()];
//! let rows = vec![
//!     Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
//!     Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
//! ];
//! let dataset = Dataset::new(header, rows).unwrap();
//!
//! let mut tree = DecisionTreeClassifier::new();
//! tree.fit(&dataset).unwrap();
//!
//! let label = tree.predict(&["Red".into(), 1.0.into()]).unwrap();
//! assert_eq!(label, "Grape");
//! ```

/// Dataset and data manipulation utilities
pub mod data;
/// Error types
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::{Result, TreeError};
