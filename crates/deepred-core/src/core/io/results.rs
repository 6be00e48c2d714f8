//! Reading and writing prediction result CSVs.

use super::TableError;
use csv::StringRecord;
use serde::Serialize;
use std::path::Path;

pub const PREDICTED_CLASS_COLUMN: &str = "Predicted_class";

/// One output row: a sample identifier and its predicted BBB class (1 permeable, 0 not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Predicted_class")]
    pub predicted_class: u8,
}

pub fn write_predictions(path: &Path, records: &[PredictionRecord]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| TableError::csv(path, e))?;
    if records.is_empty() {
        writer
            .write_record(["Name", PREDICTED_CLASS_COLUMN])
            .map_err(|e| TableError::csv(path, e))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TableError::csv(path, e))?;
    }
    writer.flush().map_err(|e| TableError::io(path, e))
}

/// A headed CSV held as raw string records, for utilities that must carry every column through.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
}

impl RawTable {
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
        let rows = reader
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TableError::csv(path, e))?;
        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == name)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), TableError> {
        let mut writer = csv::Writer::from_path(path).map_err(|e| TableError::csv(path, e))?;
        writer
            .write_record(&self.headers)
            .map_err(|e| TableError::csv(path, e))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| TableError::csv(path, e))?;
        }
        writer.flush().map_err(|e| TableError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(name: &str, class: u8) -> PredictionRecord {
        PredictionRecord {
            name: name.to_string(),
            predicted_class: class,
        }
    }

    #[test]
    fn write_predictions_uses_expected_header_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        write_predictions(&path, &[record("b", 1), record("a", 0)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Name,Predicted_class\nb,1\na,0\n");
    }

    #[test]
    fn write_predictions_emits_header_for_empty_results() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        write_predictions(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Predicted_class\n");
    }

    #[test]
    fn write_predictions_quotes_names_containing_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        write_predictions(&path, &[record("cmpd, salt", 1)]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name,Predicted_class\n\"cmpd, salt\",1\n"
        );
    }

    #[test]
    fn raw_table_preserves_extra_columns() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        fs::write(&input, "Name,Predicted_class,Note\nx1,0,first\n").unwrap();

        let table = RawTable::read_from_path(&input).unwrap();
        assert_eq!(table.column_index("Note"), Some(2));
        table.write_to_path(&output).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Name,Predicted_class,Note\nx1,0,first\n"
        );
    }
}
