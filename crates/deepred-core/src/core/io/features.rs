//! Reading the descriptor table produced by PaDEL-Descriptor.
//!
//! The table has a header row, one `Name` column holding the sample identifier, and any
//! number of numeric descriptor columns. Empty cells and the `NaN`/`Infinity` tokens the
//! descriptor tool emits for failed descriptors are read as non-finite floats.

use super::TableError;
use ndarray::Array2;
use std::path::Path;
use tracing::debug;

pub const NAME_COLUMN: &str = "Name";

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    pub names: Vec<String>,
    pub columns: Vec<String>,
    pub values: Array2<f64>,
}

impl FeatureTable {
    pub fn read_from_path(path: &Path) -> Result<Self, TableError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| TableError::csv(path, e))?;
        let headers = reader
            .headers()
            .map_err(|e| TableError::csv(path, e))?
            .clone();
        if headers.is_empty() {
            return Err(TableError::Empty {
                path: path.to_string_lossy().to_string(),
            });
        }

        let name_index = headers
            .iter()
            .position(|h| h.trim() == NAME_COLUMN)
            .ok_or_else(|| TableError::MissingColumn {
                path: path.to_string_lossy().to_string(),
                column: NAME_COLUMN,
            })?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_index)
            .map(|(_, h)| h.to_string())
            .collect();

        let mut names = Vec::new();
        let mut flat = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let record = result.map_err(|e| TableError::csv(path, e))?;
            for (column, field) in record.iter().enumerate() {
                if column == name_index {
                    names.push(field.to_string());
                } else {
                    flat.push(parse_value(field).ok_or_else(|| TableError::InvalidNumber {
                        path: path.to_string_lossy().to_string(),
                        row: row + 1,
                        column: column + 1,
                        value: field.to_string(),
                    })?);
                }
            }
        }

        let values = Array2::from_shape_vec((names.len(), columns.len()), flat)
            .map_err(|e| TableError::Shape {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        debug!(
            "Loaded feature table {:?}: {} samples x {} descriptors",
            path,
            names.len(),
            columns.len()
        );
        Ok(Self {
            names,
            columns,
            values,
        })
    }

    pub fn num_samples(&self) -> usize {
        self.names.len()
    }

    pub fn num_features(&self) -> usize {
        self.columns.len()
    }
}

/// Counts the data rows of a headed CSV file without interpreting the cells.
///
/// A file without a header row, or whose rows disagree on field count, is an error.
pub fn count_rows(path: &Path) -> Result<usize, TableError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TableError::csv(path, e))?;
    if reader
        .headers()
        .map_err(|e| TableError::csv(path, e))?
        .is_empty()
    {
        return Err(TableError::Empty {
            path: path.to_string_lossy().to_string(),
        });
    }

    let mut count = 0;
    for result in reader.records() {
        result.map_err(|e| TableError::csv(path, e))?;
        count += 1;
    }
    Ok(count)
}

pub(crate) fn parse_value(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(f64::NAN);
    }
    field.parse::<f64>().ok()
}
