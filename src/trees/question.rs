use crate::data::dataset::Row;
use crate::data::value::FeatureValue;

/// A binary test on one feature column.
///
/// A numeric reference value matches rows whose value is numeric and at
/// least as large. A categorical reference value matches on equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub column: usize,
    pub value: FeatureValue,
}

impl Question {
    pub fn new(column: usize, value: FeatureValue) -> Self {
        Self { column, value }
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.matches_features(&row.features)
    }

    /// A row without the asked column never matches.
    pub fn matches_features(&self, features: &[FeatureValue]) -> bool {
        let value = match features.get(self.column) {
            Some(value) => value,
            None => return false,
        };
        match &self.value {
            FeatureValue::Numeric(threshold) => value.as_f64().is_some_and(|v| v >= *threshold),
            FeatureValue::Categorical(_) => *value == self.value,
        }
    }

    pub fn operator(&self) -> &'static str {
        if self.value.is_numeric() {
            ">="
        } else {
            "=="
        }
    }

    /// Human readable form, e.g. `Is diameter >= 3?`.
    pub fn describe(&self, header: &[String]) -> String {
        let name = header
            .get(self.column)
            .cloned()
            .unwrap_or_else(|| format!("column {}", self.column));
        format!("Is {} {} {}?", name, self.operator(), self.value)
    }
}
