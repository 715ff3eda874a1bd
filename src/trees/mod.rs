/// Decision tree classifier: building, classifying and printing
pub mod classifier;
/// Gini impurity and information gain
pub mod impurity;
/// Tree nodes
pub mod node;
/// Split questions
pub mod question;
/// Best-split search
pub mod split;
