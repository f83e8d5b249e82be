// src/dataset/mod.rs
use std::path::{Path, PathBuf};

use crate::error::{EncodeError, Result};

pub mod load;

pub use load::load_csv;

/// Every row of a delimited file, in file order. Row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Where the rows came from; carried into error messages.
    source: PathBuf,
    /// Header followed by data rows, each a Vec of field strings.
    rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn from_rows(source: impl Into<PathBuf>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows 1..N. Empty when the file only had a header (or nothing).
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Total row count, header included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn data_len(&self) -> usize {
        self.data_rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Zero-based position of `name` in the header. Recomputed on every call.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        let header = self.header().ok_or_else(|| EncodeError::MissingHeader {
            path: self.source.clone(),
        })?;
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| EncodeError::unknown_column(name, &self.source))
    }

    /// The field of column `name` for each data row, in row order.
    ///
    /// Rows are not validated at load time, so a row too short for the
    /// resolved index is reported here with its file row number.
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let index = self.column_index(name)?;
        self.data_rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.get(index)
                    .map(String::as_str)
                    .ok_or_else(|| EncodeError::ShortRow {
                        row: i + 1,
                        column: name.to_string(),
                        index,
                    })
            })
            .collect()
    }
}
