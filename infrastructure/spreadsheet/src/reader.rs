//! Turns uploaded price lists into the cell grid the import heuristic reads.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use business::domain::import::model::Cell;

use crate::error::SpreadsheetError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Workbook,
}

impl SheetFormat {
    pub fn from_extension(extension: &str) -> Result<Self, SpreadsheetError> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "csv" | "txt" => Ok(SheetFormat::Csv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            other => Err(SpreadsheetError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_file_name(name: &str) -> Result<Self, SpreadsheetError> {
        let extension = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }
}

/// Reads the first sheet of a file on disk.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<Cell>>, SpreadsheetError> {
    let format = SheetFormat::from_file_name(&path.to_string_lossy())?;
    let bytes = std::fs::read(path)?;
    read_rows_from_bytes(bytes, format)
}

/// Reads the first sheet of an uploaded file.
pub fn read_rows_from_bytes(
    bytes: Vec<u8>,
    format: SheetFormat,
) -> Result<Vec<Vec<Cell>>, SpreadsheetError> {
    let rows = match format {
        SheetFormat::Csv => read_csv(&bytes)?,
        SheetFormat::Workbook => read_workbook(bytes)?,
    };
    tracing::debug!("Read {} spreadsheet rows", rows.len());
    Ok(rows)
}

fn read_csv(bytes: &[u8]) -> Result<Vec<Vec<Cell>>, SpreadsheetError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(bytes))
        .from_reader(bytes);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(record.iter().map(|field| Cell::from(decode(field).as_str())).collect());
    }
    Ok(rows)
}

/// Picks `;`, tab or `,` by counting them on the header line.
fn sniff_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes
        .split(|b| *b == b'\n')
        .find(|line| !line.iter().all(u8::is_ascii_whitespace))
        .unwrap_or_default();
    let count = |delimiter: u8| header.iter().filter(|b| **b == delimiter).count();

    [b';', b'\t']
        .into_iter()
        .filter(|d| count(*d) > count(b','))
        .max_by_key(|d| count(*d))
        .unwrap_or(b',')
}

/// UTF-8 when valid, Latin-1 otherwise (spreadsheets saved on Windows).
fn decode(field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(text) => text.to_string(),
        Err(_) => field.iter().map(|b| char::from(*b)).collect(),
    }
}

fn read_workbook(bytes: Vec<u8>) -> Result<Vec<Vec<Cell>>, SpreadsheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoSheets)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(to_cell).collect())
        .collect())
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(value) => Cell::from(value.as_str()),
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        other => Cell::Text(other.to_string()),
    }
}
