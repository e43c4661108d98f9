use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("spreadsheet.unsupported_format")]
    UnsupportedFormat(String),
    #[error("spreadsheet.unreadable_file")]
    Io(#[from] std::io::Error),
    #[error("spreadsheet.invalid_csv")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet.invalid_workbook")]
    Workbook(#[from] calamine::Error),
    #[error("spreadsheet.no_sheets")]
    NoSheets,
    #[error("spreadsheet.write_failed")]
    Write(#[from] rust_xlsxwriter::XlsxError),
    #[error("spreadsheet.invalid_backup")]
    Json(#[from] serde_json::Error),
}
