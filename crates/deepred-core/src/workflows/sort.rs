use crate::core::io::TableError;
use crate::core::io::features::NAME_COLUMN;
use crate::core::io::results::RawTable;
use crate::engine::error::EngineError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{info, instrument};

static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)$").expect("trailing-digit pattern is valid"));

/// Extracts the run of digits at the end of a sample identifier, e.g. `17` from `cmpd_17`.
pub fn numeric_suffix(name: &str) -> Result<u64, EngineError> {
    let digits = TRAILING_DIGITS
        .captures(name)
        .and_then(|c| c.get(1))
        .ok_or_else(|| EngineError::MissingNumericSuffix {
            name: name.to_string(),
        })?;
    digits
        .as_str()
        .parse()
        .map_err(|_| EngineError::NumericSuffixOverflow {
            name: name.to_string(),
        })
}

/// Sorts the rows of `table` ascending by the numeric suffix of the identifier column.
///
/// Rows with equal suffixes keep their relative order. Every identifier is validated before
/// anything is reordered.
pub fn sort_by_numeric_suffix(table: &mut RawTable, name_index: usize) -> Result<(), EngineError> {
    let keys = table
        .rows
        .iter()
        .map(|row| numeric_suffix(row.get(name_index).unwrap_or_default()))
        .collect::<Result<Vec<u64>, _>>()?;

    let mut keyed: Vec<_> = keys
        .into_iter()
        .zip(std::mem::take(&mut table.rows))
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    table.rows = keyed.into_iter().map(|(_, row)| row).collect();
    Ok(())
}

#[instrument(skip_all, name = "sort_workflow")]
pub fn run(input: &Path, output: &Path) -> Result<usize, EngineError> {
    info!("Sorting {:?} by numeric identifier suffix", input);
    let mut table = RawTable::read_from_path(input)?;
    let name_index = table
        .column_index(NAME_COLUMN)
        .ok_or_else(|| TableError::MissingColumn {
            path: input.to_string_lossy().to_string(),
            column: NAME_COLUMN,
        })?;

    sort_by_numeric_suffix(&mut table, name_index)?;
    table.write_to_path(output)?;

    info!("Wrote {} sorted rows to {:?}", table.rows.len(), output);
    Ok(table.rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn numeric_suffix_reads_trailing_digits() {
        assert_eq!(numeric_suffix("cmpd_17").unwrap(), 17);
        assert_eq!(numeric_suffix("42").unwrap(), 42);
        assert_eq!(numeric_suffix("mol2_batch007").unwrap(), 7);
    }

    #[test]
    fn numeric_suffix_requires_digits_at_the_end() {
        for name in ["cmpd", "cmpd_1a", ""] {
            assert!(matches!(
                numeric_suffix(name),
                Err(EngineError::MissingNumericSuffix { .. })
            ));
        }
    }

    #[test]
    fn numeric_suffix_rejects_overflowing_numbers() {
        assert!(matches!(
            numeric_suffix("cmpd_99999999999999999999999"),
            Err(EngineError::NumericSuffixOverflow { .. })
        ));
    }

    #[test]
    fn run_orders_numerically_not_lexicographically() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("predictions.csv");
        let output = dir.path().join("sorted.csv");
        fs::write(
            &input,
            "Name,Predicted_class\ncmpd_3,1\ncmpd_1,0\ncmpd_10,1\n",
        )
        .unwrap();

        let rows = run(&input, &output).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Name,Predicted_class\ncmpd_1,0\ncmpd_3,1\ncmpd_10,1\n"
        );
    }

    #[test]
    fn run_keeps_ties_in_input_order() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("predictions.csv");
        let output = dir.path().join("sorted.csv");
        fs::write(&input, "Name,Predicted_class\nb_2,1\na_2,0\nc_1,1\n").unwrap();

        run(&input, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Name,Predicted_class\nc_1,1\nb_2,1\na_2,0\n"
        );
    }

    #[test]
    fn run_fails_on_identifier_without_number_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("predictions.csv");
        let output = dir.path().join("sorted.csv");
        fs::write(&input, "Name,Predicted_class\ncmpd_1,1\naspirin,0\n").unwrap();

        match run(&input, &output) {
            Err(EngineError::MissingNumericSuffix { name }) => assert_eq!(name, "aspirin"),
            other => panic!("Expected MissingNumericSuffix, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn run_requires_name_column() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("predictions.csv");
        fs::write(&input, "Id,Predicted_class\ncmpd_1,1\n").unwrap();

        let result = run(&input, &dir.path().join("sorted.csv"));
        assert!(matches!(
            result,
            Err(EngineError::Table(TableError::MissingColumn { .. }))
        ));
    }
}
