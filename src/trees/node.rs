use super::question::Question;
use crate::data::dataset::ClassCounts;

/// Decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf {
        predictions: ClassCounts,
    },
    Decision {
        question: Question,
        true_branch: Box<Node>,
        false_branch: Box<Node>,
    },
}

impl Node {
    pub fn leaf(predictions: ClassCounts) -> Self {
        Self::Leaf { predictions }
    }

    pub fn decision(question: Question, true_branch: Node, false_branch: Node) -> Self {
        Self::Decision {
            question,
            true_branch: Box::new(true_branch),
            false_branch: Box::new(false_branch),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of decision levels above the deepest leaf. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Decision {
                true_branch,
                false_branch,
                ..
            } => 1 + true_branch.depth().max(false_branch.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision {
                true_branch,
                false_branch,
                ..
            } => true_branch.leaf_count() + false_branch.leaf_count(),
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision {
                true_branch,
                false_branch,
                ..
            } => 1 + true_branch.node_count() + false_branch.node_count(),
        }
    }
}
