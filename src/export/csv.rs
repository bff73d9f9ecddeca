//! CSV export functionality.
//!
//! Writes one domain's records to `<domain>.csv` with a `Record Type,Value`
//! header and one row per record.

use std::path::{Path, PathBuf};

use csv::Writer;

use super::row::record_rows;
use crate::config::CSV_HEADER;
use crate::error_handling::ExportError;

/// File name a domain's records are exported to.
///
/// # Errors
///
/// Returns `ExportError::InvalidFileName` for empty names, `.`/`..`, and
/// names containing path separators.
pub fn csv_file_name(domain: &str) -> Result<String, ExportError> {
    let invalid = domain.is_empty()
        || domain == "."
        || domain == ".."
        || domain.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ExportError::InvalidFileName(domain.to_string()));
    }
    Ok(format!("{domain}.csv"))
}

/// Exports record strings to `<dir>/<domain>.csv`.
///
/// Each `"<TYPE> <data>"` string is split on its first space into the two
/// columns; strings without a space are skipped. An existing file of the same
/// name is overwritten.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns an error if the domain is not a usable file name or the file
/// cannot be created or written.
pub fn export_csv<S: AsRef<str>>(
    dir: &Path,
    domain: &str,
    records: &[S],
) -> Result<PathBuf, ExportError> {
    let path = dir.join(csv_file_name(domain)?);
    let mut writer = Writer::from_path(&path)?;

    writer.write_record(CSV_HEADER)?;
    let rows = record_rows(records);
    for (record_type, value) in &rows {
        writer.write_record([*record_type, *value])?;
    }
    writer.flush()?;

    log::debug!("Wrote {} row(s) to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_csv_file_name() {
        assert_eq!(csv_file_name("example.com").unwrap(), "example.com.csv");
        for bad in ["", ".", "..", "a/b", "..\\x", "nul\0"] {
            assert!(
                matches!(csv_file_name(bad), Err(ExportError::InvalidFileName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_export_csv_single_a_record() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = export_csv(dir.path(), "example.com", &["A 93.184.216.34"]).unwrap();

        assert_eq!(path, dir.path().join("example.com.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Record Type,Value\nA,93.184.216.34\n");
    }

    #[test]
    fn test_export_csv_quotes_txt_values() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = export_csv(dir.path(), "example.com", &["TXT \"hello world\""]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "TXT");
        assert_eq!(&rows[0][1], "\"hello world\"");
    }

    #[test]
    fn test_export_csv_skips_malformed_and_overwrites() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("example.com.csv"), "stale content\n").unwrap();

        let path = export_csv(
            dir.path(),
            "example.com",
            &["NODATA", "MX mail.example.com. 10"],
        )
        .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Record Type,Value\nMX,mail.example.com. 10\n");
    }

    #[test]
    fn test_export_csv_missing_directory_is_an_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let missing = dir.path().join("does-not-exist");
        let result = export_csv(&missing, "example.com", &["A 192.0.2.1"]);
        assert!(matches!(result, Err(ExportError::Csv(_)) | Err(ExportError::Io(_))));
    }
}
