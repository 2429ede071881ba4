use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use log::debug;

use super::truncate;
use crate::error::SourceError;

/// Reads column A of the first worksheet of the xlsx workbook at `path`.
///
/// A workbook without worksheets yields an empty sequence.
pub fn read_first_column(path: &Path) -> Result<Vec<i64>, SourceError> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|err| SourceError::unreadable(path, err))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|err| SourceError::unreadable(path, err))?,
        None => {
            debug!("{} has no worksheets", path.display());
            return Ok(Vec::new());
        }
    };

    let (first_row, last_row) = match (range.start(), range.end()) {
        (Some(start), Some(end)) => (start.0, end.0),
        _ => return Ok(Vec::new()),
    };

    let mut numbers = Vec::new();
    for row in first_row..=last_row {
        match range.get_value((row, 0)).and_then(cell_value) {
            Some(value) => numbers.push(value),
            None => debug!("skipping row {}: no number in column A", row + 1),
        }
    }
    Ok(numbers)
}

/// Integer value of a numeric cell, truncated toward zero. Date-times count as numeric,
/// using their serial day number.
pub fn cell_value(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(value) => Some(*value),
        Data::Float(value) => Some(truncate(*value)),
        Data::DateTime(value) => Some(truncate(value.as_f64())),
        _ => None,
    }
}
