use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot read {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("line {line}: missing {field}")]
    MissingField { line: u64, field: &'static str },
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid cutoff date {0:?}, expected YYYY-MM-DD")]
    CutoffDate(String),
    #[error("line {line}: invalid date {value:?}, expected MM/DD/YYYY")]
    RowDate { line: u64, value: String },
    #[error("line {line}: missing Date")]
    MissingDate { line: u64 },
    #[error("input has no header row")]
    NoHeader,
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
}
