/// Rows, datasets and label counts
pub mod dataset;
/// Loading and splitting configuration
pub mod params;
/// Delimited text import
pub mod reader;
/// Tagged feature values
pub mod value;
