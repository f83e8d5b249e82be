use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the load → encode → write pipeline.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Source file missing, unreadable, not UTF-8, or not valid CSV.
    #[error("failed to read source {path:?}: {source}")]
    SourceAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The source had no rows at all, so there is no header to resolve against.
    #[error("source {path:?} has no header row")]
    MissingHeader { path: PathBuf },

    #[error("column {column:?} not found in header of {path:?}")]
    UnknownColumn { column: String, path: PathBuf },

    /// A data row has fewer fields than the resolved column index needs.
    #[error("row {row} has no field at index {index} (column {column:?})")]
    ShortRow {
        row: usize,
        column: String,
        index: usize,
    },

    #[error("no data rows to encode for column {column:?}")]
    EmptyDataset { column: String },

    #[error("vector count {vectors} does not match label count {labels}")]
    LengthMismatch { vectors: usize, labels: usize },

    #[error("failed to write output {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize output {path:?}: {source}")]
    OutputCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset has not been loaded")]
    NotLoaded,
}

impl EncodeError {
    pub fn unknown_column(column: &str, path: impl Into<PathBuf>) -> Self {
        Self::UnknownColumn {
            column: column.to_string(),
            path: path.into(),
        }
    }

    pub fn length_mismatch(vectors: usize, labels: usize) -> Self {
        Self::LengthMismatch { vectors, labels }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
