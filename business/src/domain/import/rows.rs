use super::model::{Cell, ColumnMap};
use super::price_parser::parse_price;
use crate::domain::price::model::is_valid_price;
use crate::domain::shared::text::{non_blank, normalize_ean};

const MIN_NAME_LEN: usize = 2;
const FOOTER_MARKER: &str = "TOTAL GERAL";

static EMPTY: Cell = Cell::Empty;

/// A data row that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    /// One-based line number in the sheet, header included.
    pub line: usize,
    pub name: String,
    pub price: f64,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub distributor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    EmptyName,
    NameTooShort,
    Footer,
    InvalidPrice,
}

#[derive(Debug, Default)]
pub struct ParsedRows {
    pub rows: Vec<ParsedRow>,
    pub rejected: u64,
}

fn cell(row: &[Cell], index: Option<usize>) -> &Cell {
    index.and_then(|i| row.get(i)).unwrap_or(&EMPTY)
}

/// Product name of a row, trimmed, or why it is unusable.
pub fn row_name(row: &[Cell], columns: &ColumnMap) -> Result<String, RowRejection> {
    let name = cell(row, Some(columns.name)).as_text();
    if name.is_empty() {
        return Err(RowRejection::EmptyName);
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(RowRejection::NameTooShort);
    }
    if name.to_uppercase().contains(FOOTER_MARKER) {
        return Err(RowRejection::Footer);
    }
    Ok(name)
}

/// Digits of the EAN column, when the row has any.
pub fn row_ean(row: &[Cell], columns: &ColumnMap) -> Option<String> {
    normalize_ean(Some(&cell(row, columns.ean).as_text()))
}

/// Trimmed text of an optional column, `None` when blank or absent.
pub fn optional_text(row: &[Cell], index: Option<usize>) -> Option<String> {
    non_blank(Some(cell(row, index).as_text()))
}

/// Validates one data row. `index` is the zero-based row index in the grid.
pub fn parse_row(index: usize, row: &[Cell], columns: &ColumnMap) -> Result<ParsedRow, RowRejection> {
    let name = row_name(row, columns)?;
    let price = parse_price(cell(row, Some(columns.price)))
        .filter(|p| is_valid_price(*p))
        .ok_or(RowRejection::InvalidPrice)?;

    Ok(ParsedRow {
        line: index + 1,
        name,
        price,
        ean: row_ean(row, columns),
        manufacturer: optional_text(row, columns.manufacturer),
        distributor: optional_text(row, columns.distributor),
    })
}

/// Validates every data row (the header is skipped); rejects are counted.
pub fn parse_rows(grid: &[Vec<Cell>], columns: &ColumnMap) -> ParsedRows {
    let mut parsed = ParsedRows::default();

    for (index, row) in grid.iter().enumerate().skip(1) {
        match parse_row(index, row, columns) {
            Ok(row) => parsed.rows.push(row),
            Err(_) => parsed.rejected += 1,
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> ColumnMap {
        ColumnMap {
            name: 0,
            price: 1,
            ean: Some(2),
            manufacturer: None,
            distributor: Some(3),
        }
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[test]
    fn should_keep_rows_with_positive_price() {
        let grid = vec![
            row(&["Produto", "Preco", "EAN", "Fornecedor"]),
            row(&[" Dipirona 500mg ", "R$ 12,50", "789-123", "Santa Cruz"]),
            row(&["Soro", "0", "", ""]),
            row(&["Gaze", "abc", "", ""]),
        ];

        let parsed = parse_rows(&grid, &columns());

        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rejected, 2);
        let first = &parsed.rows[0];
        assert_eq!(first.line, 2);
        assert_eq!(first.name, "Dipirona 500mg");
        assert_eq!(first.price, 12.5);
        assert_eq!(first.ean.as_deref(), Some("789123"));
        assert_eq!(first.distributor.as_deref(), Some("Santa Cruz"));
    }

    #[test]
    fn should_reject_short_names_and_footer() {
        let columns = columns();

        assert_eq!(
            parse_row(1, &row(&["", "1,00"]), &columns),
            Err(RowRejection::EmptyName)
        );
        assert_eq!(
            parse_row(1, &row(&["X", "1,00"]), &columns),
            Err(RowRejection::NameTooShort)
        );
        assert_eq!(
            parse_row(1, &row(&["Total Geral", "1.500,00"]), &columns),
            Err(RowRejection::Footer)
        );
    }

    #[test]
    fn should_tolerate_short_rows() {
        let parsed = parse_row(3, &row(&["Dipirona", "5,00"]), &columns()).unwrap();

        assert!(parsed.ean.is_none());
        assert!(parsed.distributor.is_none());
    }

    #[test]
    fn should_read_numeric_ean_cells() {
        let row = vec![
            Cell::from("Dipirona"),
            Cell::Number(9.9),
            Cell::Number(7891234567890.0),
        ];

        let parsed = parse_row(1, &row, &columns()).unwrap();

        assert_eq!(parsed.ean.as_deref(), Some("7891234567890"));
    }
}
