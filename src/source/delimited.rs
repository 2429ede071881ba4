use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use super::truncate;
use crate::error::SourceError;

/// Reads the first field of every record in the CSV file at `path`.
pub fn read_first_column(path: &Path) -> Result<Vec<i64>, SourceError> {
    let file = File::open(path).map_err(|err| SourceError::unreadable(path, err))?;
    read_first_column_from(file).map_err(|err| SourceError::unreadable(path, err))
}

/// Same as [`read_first_column`] over any reader. No header row is assumed: a textual
/// header is simply a non-numeric cell and gets skipped.
pub fn read_first_column_from<R: Read>(reader: R) -> Result<Vec<i64>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut numbers = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        match record.get(0).and_then(parse_cell) {
            Some(value) => numbers.push(value),
            None => debug!("skipping row {row}: first cell missing or not numeric"),
        }
    }
    Ok(numbers)
}

/// Parses an integer, or a finite decimal truncated toward zero.
pub fn parse_cell(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }
    cell.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(truncate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("42"), Some(42));
        assert_eq!(parse_cell(" -7 "), Some(-7));
        assert_eq!(parse_cell("3.99"), Some(3));
        assert_eq!(parse_cell("-3.99"), Some(-3));
        assert_eq!(parse_cell("1e3"), Some(1000));
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("abc"), None);
        assert_eq!(parse_cell("NaN"), None);
        assert_eq!(parse_cell("inf"), None);
    }

    #[test]
    fn test_reads_first_column_skipping_non_numeric() {
        let input = "value,comment\n5,a\n,empty\n1.7,b\nx,c\n-3\n\n9,d,extra\n";
        let numbers = read_first_column_from(input.as_bytes()).unwrap();
        assert_eq!(numbers, vec![5, 1, -3, 9]);
    }

    #[test]
    fn test_keeps_order_of_appearance() {
        let numbers = read_first_column_from("9\n1\n5\n1\n".as_bytes()).unwrap();
        assert_eq!(numbers, vec![9, 1, 5, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_first_column_from("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n.csv");
        std::fs::write(&path, "10;x\n20\n").unwrap();
        // Semicolon is not a delimiter, so "10;x" is a single non-numeric field.
        assert_eq!(read_first_column(&path).unwrap(), vec![20]);
    }
}
