// src/dataset.rs

//! Loading a decision matrix from CSV.

use crate::core::{DecisionMatrix, McdaError, Result};
use ndarray::{Array2, Axis};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Alternatives read from a table: one row per alternative, one numeric column per criterion.
#[derive(Debug, Clone)]
pub struct AlternativeTable {
    /// Alternative names, from the label column or `A1..An` when there is none.
    pub labels: Vec<String>,
    /// Criterion names taken from the header row.
    pub criteria: Vec<String>,
    pub matrix: DecisionMatrix,
}

impl AlternativeTable {
    /// Reads a CSV document with a header row.
    ///
    /// `label_column` names the column holding alternative names; every other
    /// column must parse as `f64`.
    pub fn from_reader<R: Read>(reader: R, label_column: Option<&str>) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        let label_idx = match label_column {
            Some(name) => Some(headers.iter().position(|h| h == name).ok_or_else(|| {
                McdaError::DatasetError(format!("Label column '{}' not found in header.", name))
            })?),
            None => None,
        };

        let criteria: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != label_idx)
            .map(|(_, h)| h.to_string())
            .collect();
        if criteria.is_empty() {
            return Err(McdaError::DatasetError("No criterion columns found.".to_string()));
        }

        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            for (col, field) in record.iter().enumerate() {
                if Some(col) == label_idx {
                    labels.push(field.to_string());
                    continue;
                }
                let value: f64 = field.parse().map_err(|_| {
                    McdaError::DatasetError(format!(
                        "Row {}, column '{}': '{}' is not a number.",
                        row + 1,
                        headers.get(col).unwrap_or("?"),
                        field
                    ))
                })?;
                values.push(value);
            }
        }

        let n = values.len() / criteria.len();
        if label_idx.is_none() {
            labels = (1..=n).map(|i| format!("A{}", i)).collect();
        }
        let matrix = Array2::from_shape_vec((n, criteria.len()), values)?;
        debug!(alternatives = n, criteria = criteria.len(), "loaded alternative table");

        Ok(AlternativeTable {
            labels,
            criteria,
            matrix,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P, label_column: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            McdaError::DatasetError(format!("Cannot open {}: {}", path.display(), e))
        })?;
        Self::from_reader(file, label_column)
    }

    /// Keeps only the named criteria, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let indices = names
            .iter()
            .map(|name| {
                self.criteria.iter().position(|c| c == name).ok_or_else(|| {
                    McdaError::DatasetError(format!("Unknown criterion '{}'.", name))
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(AlternativeTable {
            labels: self.labels.clone(),
            criteria: indices.iter().map(|&i| self.criteria[i].clone()).collect(),
            matrix: self.matrix.select(Axis(1), &indices),
        })
    }
}
