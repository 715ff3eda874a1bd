/// Confusion matrix and accuracy
pub mod confusion;
/// Held-out evaluation
pub mod evaluation;
