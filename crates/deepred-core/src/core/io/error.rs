use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Missing required column '{column}' in '{path}'")]
    MissingColumn { path: String, column: &'static str },
    #[error("Invalid numeric value '{value}' in '{path}' at row {row}, column {column}")]
    InvalidNumber {
        path: String,
        row: usize,
        column: usize,
        value: String,
    },
    #[error("Inconsistent table shape in '{path}': {source}")]
    Shape {
        path: String,
        source: ndarray::ShapeError,
    },
    #[error("Table '{path}' has no data")]
    Empty { path: String },
}

impl TableError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_string_lossy().to_string(),
            source,
        }
    }
}
