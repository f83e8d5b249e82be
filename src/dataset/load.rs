use std::path::Path;

use csv::{ByteRecord, Position, ReaderBuilder};
use tracing::debug;

use super::Dataset;
use crate::error::{EncodeError, Result};
use crate::progress::Progress;

/// Read every record of the delimited file at `path`, header included.
///
/// The file is read twice: once to count records so progress has a total,
/// then again to collect them. The handle is closed when this returns.
/// Blank lines are not records and are skipped.
#[tracing::instrument(level = "info", skip(path, progress), fields(path = %path.as_ref().display()))]
pub fn load_csv<P: AsRef<Path>>(path: P, progress: &mut dyn Progress) -> Result<Dataset> {
    let path = path.as_ref();
    let source_err = |source: csv::Error| EncodeError::SourceAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // field counts are checked per column at encode time
        .from_path(path)
        .map_err(source_err)?;

    // 1) count
    let mut total: u64 = 0;
    let mut scratch = ByteRecord::new();
    while rdr.read_byte_record(&mut scratch).map_err(source_err)? {
        total += 1;
    }
    rdr.seek(Position::new()).map_err(source_err)?;

    // 2) collect, validating UTF-8 as we go
    progress.start("Importing CSV", total);
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(total as usize);
    for result in rdr.records() {
        let record = result.map_err(source_err)?;
        rows.push(record.iter().map(str::to_string).collect());
        progress.inc(1);
    }
    progress.finish();

    debug!(rows = rows.len(), "loaded source");
    Ok(Dataset::from_rows(path, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_tmp(content: &[u8]) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    #[test]
    fn loads_header_and_rows_verbatim() {
        let tmp = write_tmp(
            b"Name,Age,City\nAlice,30,New York\nBob,25,Los Angeles\nCharlie,35,Chicago",
        );
        let ds = load_csv(tmp.path(), &mut NoProgress).unwrap();

        let expected: Vec<Vec<String>> = vec![
            vec!["Name".into(), "Age".into(), "City".into()],
            vec!["Alice".into(), "30".into(), "New York".into()],
            vec!["Bob".into(), "25".into(), "Los Angeles".into()],
            vec!["Charlie".into(), "35".into(), "Chicago".into()],
        ];
        assert_eq!(ds.rows(), expected.as_slice());
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.source(), tmp.path());
    }

    #[test]
    fn quoted_fields_keep_delimiters() {
        let tmp = write_tmp(b"Name,City\n\"Smith, Jane\",\"Paris\"\n");
        let ds = load_csv(tmp.path(), &mut NoProgress).unwrap();
        assert_eq!(ds.data_rows()[0], vec!["Smith, Jane".to_string(), "Paris".to_string()]);
    }

    #[test]
    fn ragged_rows_are_kept() {
        let tmp = write_tmp(b"A,B,C\n1,2\n1,2,3,4\n");
        let ds = load_csv(tmp.path(), &mut NoProgress).unwrap();
        assert_eq!(ds.data_rows()[0].len(), 2);
        assert_eq!(ds.data_rows()[1].len(), 4);
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let tmp = write_tmp(b"Name,City\nA,X\n\nB,Y\n");
        let ds = load_csv(tmp.path(), &mut NoProgress).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.column_values("Name").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn missing_file_is_source_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_csv(&path, &mut NoProgress).unwrap_err() {
            EncodeError::SourceAccess { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_source_access_error() {
        let tmp = write_tmp(b"Name\n\xff\xfe\n");
        assert!(matches!(
            load_csv(tmp.path(), &mut NoProgress),
            Err(EncodeError::SourceAccess { .. })
        ));
    }

    #[test]
    fn empty_file_loads_as_empty_dataset() {
        let tmp = write_tmp(b"");
        let ds = load_csv(tmp.path(), &mut NoProgress).unwrap();
        assert!(ds.is_empty());
    }
}
