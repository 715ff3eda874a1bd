use super::value::FeatureValue;
use crate::error::{Result, TreeError};
use crate::trees::question::Question;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt::{self, Debug, Display, Formatter};

/// One labelled example. `features[i]` belongs to `header[i]` of its dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub features: Vec<FeatureValue>,
    pub label: String,
}

impl Row {
    pub fn new(features: Vec<FeatureValue>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}

/// Label occurrence counts, kept in the order labels were first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassCounts {
    counts: Vec<(String, usize)>,
}

impl ClassCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut counts = Self::new();
        for row in rows {
            counts.add(&row.label);
        }
        counts
    }

    pub fn add(&mut self, label: &str) {
        match self.counts.iter_mut().find(|(known, _)| known == label) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((label.to_string(), 1)),
        }
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(known, _)| known == label)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// The label with the highest count. Ties go to the label seen first.
    pub fn most_common(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (label, count) in self.iter() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Relative frequency of every label, in insertion order.
    pub fn probabilities(&self) -> Vec<(&str, f64)> {
        let total = self.total() as f64;
        self.iter()
            .map(|(label, count)| (label, count as f64 / total))
            .collect()
    }
}

impl Display for ClassCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", label, count)?;
        }
        write!(f, "}}")
    }
}

/// Distinct values of `column` across `rows`, in first-seen order.
///
/// Rows too short to have `column` contribute nothing.
pub fn unique_values(rows: &[&Row], column: usize) -> Vec<FeatureValue> {
    let mut values: Vec<FeatureValue> = Vec::new();
    for value in rows.iter().filter_map(|row| row.features.get(column)) {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
    values
}

/// Splits `rows` into those matching `question` and the rest, keeping order.
pub fn partition<'a>(rows: &[&'a Row], question: &Question) -> (Vec<&'a Row>, Vec<&'a Row>) {
    rows.iter().copied().partition(|row| question.matches(row))
}

/// A header plus the rows it describes. The last header entry names the label.
///
/// Only [`Dataset::new`] builds one, so every row has one feature per
/// non-label header column.
#[derive(Clone, PartialEq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        writeln!(f, "    header: {:?},", self.header)?;
        writeln!(f, "    rows: [")?;
        for row in &self.rows {
            write!(f, "        [")?;
            for value in &row.features {
                write!(f, "{}, ", value)?;
            }
            writeln!(f, "{}],", row.label)?;
        }
        write!(f, "    ]\n}}")
    }
}

impl Dataset {
    /// Builds a dataset, checking every row against the header width.
    pub fn new(header: Vec<String>, rows: Vec<Row>) -> Result<Self> {
        let dataset = Self { header, rows };
        dataset.check_shape()?;
        Ok(dataset)
    }

    /// Checks the header names a label and at least one feature, and that
    /// every row carries one value per feature column.
    pub fn check_shape(&self) -> Result<()> {
        if self.header.len() < 2 {
            return Err(TreeError::HeaderTooShort(self.header.len()));
        }
        let expected = self.header.len() - 1;
        match self
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.features.len() != expected)
        {
            Some((row, bad)) => Err(TreeError::RowWidth {
                row,
                expected: self.header.len(),
                actual: bad.features.len() + 1,
            }),
            None => Ok(()),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_features(&self) -> usize {
        self.header.len() - 1
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_refs(&self) -> Vec<&Row> {
        self.rows.iter().collect()
    }

    pub fn class_counts(&self) -> ClassCounts {
        ClassCounts::from_rows(&self.rows)
    }

    fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            header: self.header.clone(),
            rows,
        }
    }

    /// Owning counterpart of [`partition`].
    pub fn partition(&self, question: &Question) -> (Self, Self) {
        let (matching, rest): (Vec<Row>, Vec<Row>) = self
            .rows
            .iter()
            .cloned()
            .partition(|row| question.matches(row));
        (self.with_rows(matching), self.with_rows(rest))
    }

    /// Shuffles the rows and splits them into training and testing sets.
    ///
    /// The training set gets `floor(nrows * train_size)` rows.
    pub fn train_test_split(&self, train_size: f64, seed: Option<u64>) -> Result<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::InvalidParameter {
                name: "train_size".into(),
                value: train_size.to_string(),
                reason: "should be between 0.0 and 1.0".into(),
            });
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut rows = self.rows.clone();
        rows.shuffle(&mut rng);
        let train_size = (self.nrows() as f64 * train_size).floor() as usize;
        let test_rows = rows.split_off(train_size);

        Ok((self.with_rows(rows), self.with_rows(test_rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::classifier::DecisionTreeClassifier;

    fn fruit() -> Dataset {
        let rows = vec![
            Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Yellow".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
            Row::new(vec!["Red".into(), 1.0.into()], "Grape"),
            Row::new(vec!["Yellow".into(), 3.0.into()], "Lemon"),
        ];
        let header = vec!["color".into(), "diameter".into(), "label".into()];
        Dataset::new(header, rows).unwrap()
    }

    #[test]
    fn test_dataset_new_rejects_ragged_rows() {
        let header = vec!["color".into(), "diameter".into(), "label".into()];
        let rows = vec![
            Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Red".into()], "Grape"),
        ];
        match Dataset::new(header, rows) {
            Err(TreeError::RowWidth { row, expected, actual }) => {
                assert_eq!((row, expected, actual), (1, 3, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_dataset_new_rejects_short_header() {
        assert!(matches!(
            Dataset::new(vec!["label".into()], vec![]),
            Err(TreeError::HeaderTooShort(1))
        ));
    }

    #[test]
    fn test_fit_rejects_ragged_rows_without_panicking() {
        let dataset = Dataset {
            header: vec!["color".into(), "diameter".into(), "label".into()],
            rows: vec![
                Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
                Row::new(vec!["Red".into()], "Grape"),
            ],
        };
        let mut classifier = DecisionTreeClassifier::new();
        assert!(matches!(
            classifier.fit(&dataset),
            Err(TreeError::RowWidth { row: 1, expected: 3, actual: 2 })
        ));
        assert!(!classifier.is_fitted());
    }

    #[test]
    fn test_unique_values_skips_short_rows() {
        let rows = vec![
            Row::new(vec!["Green".into(), 3.0.into()], "Apple"),
            Row::new(vec!["Red".into()], "Grape"),
        ];
        let refs: Vec<_> = rows.iter().collect();
        assert_eq!(unique_values(&refs, 1), vec![FeatureValue::from(3.0)]);
    }

    #[test]
    fn test_class_counts_insertion_order() {
        let counts = fruit().class_counts();
        let labels: Vec<_> = counts.iter().collect();
        assert_eq!(labels, vec![("Apple", 2), ("Grape", 2), ("Lemon", 1)]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get("Banana"), 0);
    }

    #[test]
    fn test_most_common_prefers_first_on_tie() {
        assert_eq!(fruit().class_counts().most_common(), Some("Apple"));
        let empty = ClassCounts::new();
        assert!(empty.is_empty());
        assert_eq!(empty.most_common(), None);
    }

    #[test]
    fn test_class_counts_display() {
        assert_eq!(
            fruit().class_counts().to_string(),
            "{Apple: 2, Grape: 2, Lemon: 1}"
        );
    }

    #[test]
    fn test_unique_values_first_seen_order() {
        let dataset = fruit();
        let rows = dataset.row_refs();
        assert_eq!(
            unique_values(&rows, 0),
            vec![
                FeatureValue::from("Green"),
                FeatureValue::from("Yellow"),
                FeatureValue::from("Red")
            ]
        );
        assert_eq!(
            unique_values(&rows, 1),
            vec![FeatureValue::from(3.0), FeatureValue::from(1.0)]
        );
    }

    #[test]
    fn test_partition_is_disjoint_and_covering() {
        let dataset = fruit();
        let rows = dataset.row_refs();
        for column in 0..dataset.num_features() {
            for value in unique_values(&rows, column) {
                let question = Question::new(column, value);
                let (matching, rest) = partition(&rows, &question);
                assert_eq!(matching.len() + rest.len(), rows.len());
                for row in &rows {
                    let in_true = matching.iter().any(|r| std::ptr::eq(*r, *row));
                    let in_false = rest.iter().any(|r| std::ptr::eq(*r, *row));
                    assert!(in_true != in_false);
                }
            }
        }
    }

    #[test]
    fn test_dataset_partition_keeps_order() {
        let (matching, rest) = fruit().partition(&Question::new(1, 3.0.into()));
        let labels: Vec<_> = matching.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Apple", "Apple", "Lemon"]);
        assert_eq!(rest.nrows(), 2);
        assert_eq!(rest.header(), matching.header());
    }

    #[test]
    fn test_dataset_train_test_split() {
        let (train, test) = fruit().train_test_split(0.7, Some(42)).unwrap();
        assert_eq!(train.nrows(), 3);
        assert_eq!(test.nrows(), 2);
    }

    #[test]
    fn test_dataset_train_test_split_is_seeded() {
        let dataset = fruit();
        let first = dataset.train_test_split(0.6, Some(7)).unwrap();
        let second = dataset.train_test_split(0.6, Some(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dataset_train_test_split_rejects_bad_ratio() {
        assert!(fruit().train_test_split(1.5, None).is_err());
    }

    #[test]
    fn test_dataset_formatting() {
        let dataset = Dataset::new(
            vec!["color".into(), "label".into()],
            vec![Row::new(vec!["Red".into()], "Grape")],
        )
        .unwrap();
        let expected = "\
Dataset {
    header: [\"color\", \"label\"],
    rows: [
        [Red, Grape],
    ]
}";
        assert_eq!(format!("{:?}", dataset), expected);
    }
}
