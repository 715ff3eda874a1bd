//! Decision Tree Classifier
use super::node::Node;
use super::split::find_best_split;
use crate::data::dataset::{partition, ClassCounts, Dataset, Row};
use crate::data::value::FeatureValue;
use crate::error::{Result, TreeError};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, info};

/// Decision Tree Classifier
///
/// Grows a binary tree with no depth limit: splitting stops only when no
/// question improves the Gini impurity of a node.
#[derive(Clone, Debug, Default)]
pub struct DecisionTreeClassifier {
    root: Option<Box<Node>>,
    header: Vec<String>,
}

impl DecisionTreeClassifier {
    /// Creates a new, untrained classifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The training rows together with their header.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyDataset`] if the dataset has no rows, or a
    /// shape error if a row doesn't match the header width.
    pub fn fit(&mut self, dataset: &Dataset) -> Result<()> {
        dataset.check_shape()?;
        if dataset.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let root = Self::build_tree(&dataset.row_refs(), 0);
        info!(
            rows = dataset.nrows(),
            depth = root.depth(),
            leaves = root.leaf_count(),
            "Finished building the tree"
        );
        self.root = Some(Box::new(root));
        self.header = dataset.header().to_vec();
        Ok(())
    }

    fn build_tree(rows: &[&Row], depth: usize) -> Node {
        let split = match find_best_split(rows) {
            Some(split) => split,
            None => {
                let predictions = ClassCounts::from_rows(rows.iter().copied());
                debug!(depth, predictions = %predictions, "Leaf");
                return Node::leaf(predictions);
            }
        };

        debug!(
            depth,
            column = split.question.column,
            value = %split.question.value,
            gain = split.gain,
            "Split"
        );
        let (true_rows, false_rows) = partition(rows, &split.question);
        let true_branch = Self::build_tree(&true_rows, depth + 1);
        let false_branch = Self::build_tree(&false_rows, depth + 1);
        Node::decision(split.question, true_branch, false_branch)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn is_fitted(&self) -> bool {
        self.root.is_some()
    }

    /// Walks the tree for one row and returns the label counts of the leaf it reaches.
    ///
    /// # Errors
    ///
    /// Fails if the tree wasn't built yet or if `features` is shorter than a
    /// column the tree asks about.
    pub fn classify(&self, features: &[FeatureValue]) -> Result<&ClassCounts> {
        let mut node = self.root.as_deref().ok_or(TreeError::NotFitted)?;
        loop {
            match node {
                Node::Leaf { predictions } => return Ok(predictions),
                Node::Decision {
                    question,
                    true_branch,
                    false_branch,
                } => {
                    if question.column >= features.len() {
                        return Err(TreeError::ColumnOutOfBounds {
                            column: question.column,
                            width: features.len(),
                        });
                    }
                    node = if question.matches_features(features) {
                        true_branch.as_ref()
                    } else {
                        false_branch.as_ref()
                    };
                }
            }
        }
    }

    pub fn classify_row(&self, row: &Row) -> Result<&ClassCounts> {
        self.classify(&row.features)
    }

    /// Most common label at the leaf reached by `features`.
    pub fn predict(&self, features: &[FeatureValue]) -> Result<String> {
        let predictions = self.classify(features)?;
        predictions
            .most_common()
            .map(str::to_string)
            .ok_or(TreeError::EmptyDataset)
    }

    fn write_node(&self, f: &mut Formatter<'_>, node: &Node, spacing: &str) -> fmt::Result {
        match node {
            Node::Leaf { predictions } => writeln!(f, "{}Predict {}", spacing, predictions),
            Node::Decision {
                question,
                true_branch,
                false_branch,
            } => {
                let nested = format!("{}  ", spacing);
                writeln!(f, "{}{}", spacing, question.describe(&self.header))?;
                writeln!(f, "{}--> True:", spacing)?;
                self.write_node(f, true_branch, &nested)?;
                writeln!(f, "{}--> False:", spacing)?;
                self.write_node(f, false_branch, &nested)
            }
        }
    }
}

impl Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            Some(root) => self.write_node(f, root, ""),
            None => writeln!(f, "<unfitted tree>"),
        }
    }
}
