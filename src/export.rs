// src/export.rs
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::config::ColumnPair;
use crate::error::{EncodeError, Result};
use crate::progress::Progress;

/// Render a code vector as `[65, 108, 105]`.
pub fn format_vector(codes: &[u32]) -> String {
    let items: Vec<String> = codes.iter().map(u32::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// `dir/.name.tmp`, beside the destination so the final rename stays on one filesystem.
fn tmp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write the header `columns` then one `vector,label` row per record.
///
/// - checks `vectors.len() == labels.len()` before touching the filesystem
/// - writes to a temporary file, then renames over `path` once flushed, so
///   a failure never leaves a partial destination behind
#[tracing::instrument(level = "info", skip(path, vectors, labels, progress), fields(path = %path.as_ref().display()))]
pub fn write_encoded<P: AsRef<Path>>(
    path: P,
    columns: &ColumnPair,
    vectors: &[Vec<u32>],
    labels: &[u32],
    progress: &mut dyn Progress,
) -> Result<()> {
    let path = path.as_ref();
    if vectors.len() != labels.len() {
        return Err(EncodeError::length_mismatch(vectors.len(), labels.len()));
    }

    let tmp_path = tmp_path_for(path);
    let result = write_rows(&tmp_path, columns, vectors, labels, progress);
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        EncodeError::Output {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(rows = vectors.len(), "wrote output");
    Ok(())
}

fn write_rows(
    tmp_path: &Path,
    columns: &ColumnPair,
    vectors: &[Vec<u32>],
    labels: &[u32],
    progress: &mut dyn Progress,
) -> Result<()> {
    let io_err = |source| EncodeError::Output {
        path: tmp_path.to_path_buf(),
        source,
    };
    let csv_err = |source| EncodeError::OutputCsv {
        path: tmp_path.to_path_buf(),
        source,
    };

    let file = File::create(tmp_path).map_err(io_err)?;
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(file);

    wtr.write_record([columns.name.as_str(), columns.label.as_str()])
        .map_err(csv_err)?;

    progress.start("Export CSV", vectors.len() as u64);
    for (codes, label) in vectors.iter().zip(labels) {
        wtr.write_record([format_vector(codes), label.to_string()])
            .map_err(csv_err)?;
        progress.inc(1);
    }
    progress.finish();

    // flush the csv buffer, then the file itself
    wtr.flush().map_err(io_err)?;
    let file = wtr
        .into_inner()
        .map_err(|e| io_err(io::Error::new(e.error().kind(), e.error().to_string())))?;
    file.sync_all().map_err(io_err)?;

    debug!(tmp = %tmp_path.display(), "flushed temporary output");
    Ok(())
}
