use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::data::{PivotRecord, ReadError};

/// Pivot files are named `pivot` + uppercased currency code, e.g. `pivotEUR`.
const PIVOT_PREFIX: &str = "pivot";

/// Trait for fetching the pivot record of one currency. The evaluator only
/// talks to this, so tests can feed it records from a plain map instead of
/// laying files out on disk.
pub(crate) trait RecordSource {
    fn load(&self, dir: &Path, currency: &str) -> Result<PivotRecord, ReadError>;
}

/// Build the path of a currency's pivot file under `dir`. Pure; doesn't
/// check that anything exists there.
pub(crate) fn pivot_path(dir: &Path, currency: &str) -> PathBuf {
    dir.join(format!("{PIVOT_PREFIX}{}", currency.to_uppercase()))
}

/// Read the record from the first line of the file at `path`. Anything past
/// the first line is ignored on purpose: the producer appends history below
/// it and only the top line describes the current day.
pub(crate) fn read_record(path: &Path) -> Result<PivotRecord, ReadError> {
    let file = File::open(path).map_err(|e| ReadError::FileAccess {
        path: path.to_owned(),
        source: e,
    })?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| ReadError::FileAccess {
            path: path.to_owned(),
            source: e,
        })?;
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(';').collect();
    match fields[..] {
        [computation_date, consumption_date, value] => Ok(PivotRecord {
            computation_date: computation_date.to_string(),
            consumption_date: consumption_date.to_string(),
            value: value.to_string(),
        }),
        _ => Err(ReadError::MalformedRecord {
            path: path.to_owned(),
            fields: fields.len(),
        }),
    }
}

/// The real source: resolve the path, read the file.
pub(crate) struct FsRecordSource;

impl RecordSource for FsRecordSource {
    fn load(&self, dir: &Path, currency: &str) -> Result<PivotRecord, ReadError> {
        read_record(&pivot_path(dir, currency))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use crate::data::{PivotRecord, ReadError};
    use crate::read::{pivot_path, read_record, FsRecordSource, RecordSource};

    fn write_pivot(dir: &Path, currency: &str, contents: &str) {
        let mut file = std::fs::File::create(pivot_path(dir, currency)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn path_uses_prefix_and_uppercased_currency() {
        let path = pivot_path(Path::new("/data/pivots"), "eur");
        assert_eq!(path, Path::new("/data/pivots").join("pivotEUR"));
    }

    #[test]
    fn reads_first_line_record() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(dir.path(), "EUR", "2024/01/10;2024/01/10;100.5\n");
        assert_eq!(
            FsRecordSource.load(dir.path(), "eur").unwrap(),
            PivotRecord {
                computation_date: "2024/01/10".to_string(),
                consumption_date: "2024/01/10".to_string(),
                value: "100.5".to_string(),
            }
        );
    }

    #[test]
    fn ignores_lines_after_the_first() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(
            dir.path(),
            "USD",
            "2024/01/10;2024/01/10;1.0\nnot;even;close;to;valid\n",
        );
        let record = FsRecordSource.load(dir.path(), "usd").unwrap();
        assert_eq!(record.value, "1.0");
    }

    #[test]
    fn strips_crlf_before_splitting() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(dir.path(), "GBP", "2024/01/09;2024/01/10;50\r\n");
        let record = FsRecordSource.load(dir.path(), "gbp").unwrap();
        assert_eq!(record.value, "50");
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FsRecordSource.load(dir.path(), "chf").unwrap_err();
        assert!(matches!(err, ReadError::FileAccess { .. }));
    }

    #[test]
    fn two_fields_is_a_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(dir.path(), "JPY", "2024/01/10;2024/01/10\n");
        let err = FsRecordSource.load(dir.path(), "jpy").unwrap_err();
        assert!(matches!(err, ReadError::MalformedRecord { fields: 2, .. }));
    }

    #[test]
    fn four_fields_is_a_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(dir.path(), "JPY", "a;b;c;d\n");
        let err = read_record(&pivot_path(dir.path(), "JPY")).unwrap_err();
        assert!(matches!(err, ReadError::MalformedRecord { fields: 4, .. }));
    }

    #[test]
    fn empty_file_is_a_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        write_pivot(dir.path(), "SEK", "");
        let err = FsRecordSource.load(dir.path(), "sek").unwrap_err();
        assert!(matches!(err, ReadError::MalformedRecord { fields: 1, .. }));
    }
}
