use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: any of these stops the run before a model is reported.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no header line starting with '{marker}' found")]
    HeaderNotFound { marker: &'static str },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("not enough distinct years for a regression: need {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("regression denominator is zero (no variance in years)")]
    DegenerateRegression,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A date value that matched none of the known formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised date '{value}'")]
pub struct UnparseableDate {
    pub value: String,
}

/// Row-level problem; the row is dropped and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowWarning {
    #[error("line {line}: expected {expected} fields, found {found}; row skipped")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unrecognised date '{value}'; row skipped")]
    UnparseableDate { line: usize, value: String },
}
