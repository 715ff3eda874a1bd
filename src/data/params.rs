use crate::error::{Result, TreeError};

/// How a delimited file is read and split into training and testing sets.
#[derive(Clone, Debug)]
pub struct LoadParams {
    pub delimiter: u8,
    pub infer_numeric: bool,
    pub train_ratio: f64,
    pub seed: Option<u64>,
}

impl Default for LoadParams {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadParams {
    pub fn new() -> Self {
        Self {
            delimiter: b';',
            infer_numeric: true,
            train_ratio: 0.7,
            seed: None,
        }
    }

    pub fn set_delimiter(&mut self, delimiter: char) -> Result<()> {
        if !delimiter.is_ascii() || delimiter == '\n' || delimiter == '\r' {
            return Err(TreeError::InvalidParameter {
                name: "delimiter".into(),
                value: delimiter.escape_default().to_string(),
                reason: "the delimiter must be a single ASCII character other than a newline".into(),
            });
        }
        self.delimiter = delimiter as u8;
        Ok(())
    }

    pub fn set_train_ratio(&mut self, train_ratio: f64) -> Result<()> {
        if !(train_ratio > 0.0 && train_ratio < 1.0) {
            return Err(TreeError::InvalidParameter {
                name: "train_ratio".into(),
                value: train_ratio.to_string(),
                reason: "the training ratio must lie strictly between 0 and 1".into(),
            });
        }
        self.train_ratio = train_ratio;
        Ok(())
    }

    pub fn set_infer_numeric(&mut self, infer_numeric: bool) {
        self.infer_numeric = infer_numeric;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn infer_numeric(&self) -> bool {
        self.infer_numeric
    }

    pub fn train_ratio(&self) -> f64 {
        self.train_ratio
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
