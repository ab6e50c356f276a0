use crate::prelude::*;

use calamine::{open_workbook_auto, Reader};
use std::{io::Read, path::Path};

fn read_failed(underlying: impl std::fmt::Display) -> SpreadsheetError {
    SpreadsheetError::ReadFailed {
        underlying: underlying.to_string(),
    }
}

fn push_non_blank<'a>(cells: &mut Vec<String>, row: impl IntoIterator<Item = &'a str>) {
    cells.extend(
        row.into_iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .map(str::to_owned),
    );
}

/// Flattens every cell of a CSV export into one trimmed string per cell.
/// Blank cells and rows are dropped.
pub fn read_spreadsheet_cells<R: Read>(reader: R) -> Result<Vec<String>, SpreadsheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cells = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(read_failed)?;
        push_non_blank(&mut cells, record.iter());
    }
    debug!("Read {} non blank cells from spreadsheet", cells.len());
    Ok(cells)
}

/// Flattens every cell of the first worksheet of a workbook (xlsx, xlsm,
/// xlsb, xls or ods), row by row. Blank cells and rows are dropped.
pub fn read_workbook_cells(path: impl AsRef<Path>) -> Result<Vec<String>, SpreadsheetError> {
    let path = path.as_ref();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| read_failed(format!("{}: {e}", path.display())))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| read_failed(format!("{} has no worksheet", path.display())))?
        .map_err(read_failed)?;

    let mut cells = Vec::new();
    for row in range.rows() {
        let row: Vec<String> = row.iter().map(ToString::to_string).collect();
        push_non_blank(&mut cells, row.iter().map(String::as_str));
    }
    debug!(
        "Read {} non blank cells from first sheet of {}",
        cells.len(),
        path.display()
    );
    Ok(cells)
}

/// Reads recipients from a file, as CSV when the extension is `csv` or `txt`
/// and as a workbook otherwise.
pub fn read_spreadsheet_file(path: impl AsRef<Path>) -> Result<Vec<String>, SpreadsheetError> {
    let path = path.as_ref();
    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"));
    if !is_text {
        return read_workbook_cells(path);
    }
    let file = std::fs::File::open(path)
        .map_err(|e| read_failed(format!("{}: {e}", path.display())))?;
    read_spreadsheet_cells(file)
}

/// Splits a manually typed recipient list on commas and line breaks.
pub fn split_recipient_list(text: &str) -> Vec<String> {
    text.split(|c: char| matches!(c, ',' | '\n' | '\r'))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}
