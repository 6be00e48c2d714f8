//! Loader for the headerless reference dataset the scaler is fitted on.

use super::TableError;
use super::features::parse_value;
use ndarray::Array2;
use std::path::Path;
use tracing::debug;

pub fn read_reference_data(path: &Path) -> Result<Array2<f64>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| TableError::csv(path, e))?;

    let mut num_columns = 0;
    let mut num_rows = 0;
    let mut flat = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| TableError::csv(path, e))?;
        num_columns = record.len();
        num_rows += 1;
        for (column, field) in record.iter().enumerate() {
            flat.push(parse_value(field).ok_or_else(|| TableError::InvalidNumber {
                path: path.to_string_lossy().to_string(),
                row: row + 1,
                column: column + 1,
                value: field.to_string(),
            })?);
        }
    }

    if num_rows == 0 {
        return Err(TableError::Empty {
            path: path.to_string_lossy().to_string(),
        });
    }

    debug!(
        "Loaded reference data {:?}: {} rows x {} columns",
        path, num_rows, num_columns
    );
    Array2::from_shape_vec((num_rows, num_columns), flat).map_err(|e| TableError::Shape {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
