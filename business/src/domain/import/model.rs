use uuid::Uuid;

/// One spreadsheet cell as read from CSV or a workbook.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Trimmed text form. Integral numbers print without a fractional part
    /// so EAN codes stored as numbers survive (`7891234567890`).
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.trim().to_string(),
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e18 => {
                format!("{}", *value as i64)
            }
            Cell::Number(value) => value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// Zero-based column indexes detected from the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub price: usize,
    pub ean: Option<usize>,
    pub manufacturer: Option<usize>,
    pub distributor: Option<usize>,
}

/// Distributor used when an upload names none.
pub const DEFAULT_DISTRIBUTOR_NAME: &str = "Planilha Principal";

/// Distributor that receives rows without a distributor column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributorSelection {
    /// Must already exist.
    Id(Uuid),
    /// Looked up by name, created when unknown.
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub total_rows: u64,
    pub imported_prices: u64,
    pub rejected_rows: u64,
    pub failed_inserts: u64,
    pub products_created: u64,
    pub products_reused: u64,
    pub distributors_created: u64,
    pub eans_backfilled: u64,
    pub columns: ColumnMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub total_rows: u64,
    pub inserted: u64,
    pub skipped: u64,
    pub invalid: u64,
    pub failed: u64,
    pub columns: ColumnMap,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectedRow {
    pub line: usize,
    pub name: String,
    pub raw_price: String,
    pub price: Option<f64>,
    pub valid: bool,
}

/// Detection result plus a preview of the first data rows; nothing is written.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub total_rows: u64,
    pub header: Vec<String>,
    pub columns: ColumnMap,
    pub rows: Vec<InspectedRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_print_integral_numbers_without_fraction() {
        assert_eq!(Cell::Number(7891234567890.0).as_text(), "7891234567890");
        assert_eq!(Cell::Number(12.5).as_text(), "12.5");
    }

    #[test]
    fn should_treat_whitespace_text_as_blank() {
        assert!(Cell::Text("  ".to_string()).is_blank());
        assert!(Cell::Empty.is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }
}
