//! Delimited text import.
//!
//! The first record is the header, the last column of every record is the
//! label and the remaining fields become [`FeatureValue`]s.
use super::dataset::{Dataset, Row};
use super::params::LoadParams;
use super::value::FeatureValue;
use crate::error::{Result, TreeError};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn read_path<P: AsRef<Path>>(path: P, params: &LoadParams) -> Result<Dataset> {
    let path = path.as_ref();
    let reader = builder(params).from_path(path)?;
    let dataset = read_records(reader, params)?;
    info!(
        path = %path.display(),
        rows = dataset.nrows(),
        features = dataset.num_features(),
        "Loaded dataset"
    );
    Ok(dataset)
}

pub fn read_from<R: Read>(source: R, params: &LoadParams) -> Result<Dataset> {
    read_records(builder(params).from_reader(source), params)
}

fn builder(params: &LoadParams) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(params.delimiter())
        .has_headers(true)
        .flexible(true);
    builder
}

fn read_records<R: Read>(mut reader: csv::Reader<R>, params: &LoadParams) -> Result<Dataset> {
    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    if header.is_empty() {
        return Err(TreeError::MissingHeader);
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != header.len() {
            return Err(TreeError::RowWidth {
                row: index,
                expected: header.len(),
                actual: record.len(),
            });
        }
        let (label, features) = match record.iter().collect::<Vec<_>>().split_last() {
            Some((label, features)) => (
                label.trim().to_string(),
                features
                    .iter()
                    .map(|field| FeatureValue::parse(field, params.infer_numeric()))
                    .collect(),
            ),
            None => return Err(TreeError::MissingHeader),
        };
        rows.push(Row { features, label });
    }

    Dataset::new(header, rows)
}
