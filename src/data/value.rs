use std::fmt::{self, Display, Formatter};

/// A single feature cell.
///
/// Numeric values split on a `>=` threshold, categorical values split on
/// equality. Which one a cell becomes is decided once, at load time.
#[derive(Clone, Debug)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
}

impl FeatureValue {
    /// Parses a raw field.
    ///
    /// With `infer_numeric` set, any field that parses as a finite `f64` is
    /// numeric. Everything else, including `NaN` and `inf`, is kept as text.
    pub fn parse(raw: &str, infer_numeric: bool) -> Self {
        let raw = raw.trim();
        if infer_numeric {
            if let Ok(number) = raw.parse::<f64>() {
                if number.is_finite() {
                    return Self::Numeric(number);
                }
            }
        }
        Self::Categorical(raw.to_string())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(number) => Some(*number),
            Self::Categorical(_) => None,
        }
    }
}

impl PartialEq for FeatureValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a == b,
            (Self::Categorical(a), Self::Categorical(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(number: f64) -> Self {
        Self::Numeric(number)
    }
}

impl From<&str> for FeatureValue {
    fn from(text: &str) -> Self {
        Self::Categorical(text.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(text: String) -> Self {
        Self::Categorical(text)
    }
}

impl Display for FeatureValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(number) => write!(f, "{}", number),
            Self::Categorical(text) => write!(f, "{}", text),
        }
    }
}
