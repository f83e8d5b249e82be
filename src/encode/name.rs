use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{EncodeError, Result};
use crate::progress::Progress;

/// Longest value in characters (not bytes).
pub fn max_char_len<'a, I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().map(|v| v.chars().count()).max()
}

/// Code point of each char, right-padded with 0 up to `width`.
/// Values longer than `width` are not truncated.
pub fn encode_name(value: &str, width: usize) -> Vec<u32> {
    let mut codes: Vec<u32> = value.chars().map(u32::from).collect();
    if codes.len() < width {
        codes.resize(width, 0);
    }
    codes
}

/// Encode column `column` of every data row as a fixed-width code vector.
///
/// Width is the longest value in the column, computed on every call.
/// Fails with [`EncodeError::EmptyDataset`] when there are no data rows.
#[tracing::instrument(level = "info", skip(dataset, progress))]
pub fn encode_names(
    dataset: &Dataset,
    column: &str,
    progress: &mut dyn Progress,
) -> Result<Vec<Vec<u32>>> {
    let values = dataset.column_values(column)?;
    let width = max_char_len(values.iter().copied()).ok_or_else(|| EncodeError::EmptyDataset {
        column: column.to_string(),
    })?;
    debug!(width, rows = values.len(), "name width");

    progress.start("Handle Name", values.len() as u64);
    let vectors = values
        .into_iter()
        .map(|v| {
            let codes = encode_name(v, width);
            progress.inc(1);
            codes
        })
        .collect();
    progress.finish();

    Ok(vectors)
}
