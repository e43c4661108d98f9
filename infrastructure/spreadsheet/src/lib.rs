pub mod error;
pub mod reader;
pub mod workbook;

pub use error::SpreadsheetError;
pub use reader::{SheetFormat, read_rows, read_rows_from_bytes};
pub use workbook::{snapshot_from_json, snapshot_to_json, snapshot_to_xlsx};
