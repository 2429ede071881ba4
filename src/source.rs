//! Reading the number column out of tabular files.
//!
//! Only the first column of the first sheet (or of the file, for CSV) is read, top to
//! bottom. Numeric cells contribute their value truncated toward zero (`2.9` → `2`,
//! `-2.9` → `-2`, saturating at the `i64` bounds); missing and non-numeric cells are
//! skipped. Fractional values are truncated rather than rejected or rounded.

use std::path::Path;

use log::debug;

use crate::error::SourceError;

pub mod delimited;
pub mod spreadsheet;

/// Supplies the integer sequence for a source reference.
pub trait NumberSource {
    fn read_numbers(&self, path: &Path) -> Result<Vec<i64>, SourceError>;
}

/// Recognised tabular formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    Xlsx,
    Csv,
}

impl TabularFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("xlsx") {
            Some(TabularFormat::Xlsx)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(TabularFormat::Csv)
        } else {
            None
        }
    }
}

/// File-system backed [`NumberSource`] choosing a reader from the extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularFileSource;

impl TabularFileSource {
    pub fn new() -> Self {
        TabularFileSource
    }

    /// Checks existence, file-ness and format, in that order.
    pub fn check_path(path: &Path) -> Result<TabularFormat, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }
        TabularFormat::from_path(path)
            .ok_or_else(|| SourceError::WrongFormat(path.to_path_buf()))
    }
}

impl NumberSource for TabularFileSource {
    fn read_numbers(&self, path: &Path) -> Result<Vec<i64>, SourceError> {
        let format = Self::check_path(path)?;
        let numbers = match format {
            TabularFormat::Xlsx => spreadsheet::read_first_column(path)?,
            TabularFormat::Csv => delimited::read_first_column(path)?,
        };
        debug!(
            "read {} numbers from {} ({format:?})",
            numbers.len(),
            path.display()
        );
        Ok(numbers)
    }
}

/// Truncates toward zero; NaN becomes 0 and infinities saturate.
pub(crate) fn truncate(value: f64) -> i64 {
    value as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            TabularFormat::from_path(Path::new("data.xlsx")),
            Some(TabularFormat::Xlsx)
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("DATA.XLSX")),
            Some(TabularFormat::Xlsx)
        );
        assert_eq!(
            TabularFormat::from_path(Path::new("data.csv")),
            Some(TabularFormat::Csv)
        );
        assert_eq!(TabularFormat::from_path(Path::new("data.xls")), None);
        assert_eq!(TabularFormat::from_path(Path::new("data")), None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xlsx");
        assert!(matches!(
            TabularFileSource.read_numbers(&path),
            Err(SourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested.xlsx");
        fs::create_dir(&path).unwrap();
        assert!(matches!(
            TabularFileSource.read_numbers(&path),
            Err(SourceError::NotAFile(_))
        ));
    }

    #[test]
    fn test_wrong_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.txt");
        fs::write(&path, "1\n2\n").unwrap();
        assert!(matches!(
            TabularFileSource.read_numbers(&path),
            Err(SourceError::WrongFormat(_))
        ));
    }

    #[test]
    fn test_csv_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numbers.CSV");
        fs::write(&path, "3\n1\n2\n").unwrap();
        assert_eq!(
            TabularFileSource.read_numbers(&path).unwrap(),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(2.9), 2);
        assert_eq!(truncate(-2.9), -2);
        assert_eq!(truncate(f64::NAN), 0);
        assert_eq!(truncate(f64::INFINITY), i64::MAX);
        assert_eq!(truncate(f64::NEG_INFINITY), i64::MIN);
    }
}
