use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::ImportError;
use super::model::{Cell, ColumnMap};
use crate::domain::shared::text::normalize_header;

const EAN_KEYWORDS: &[&str] = &["ean", "gtin", "barras", "barcode", "codigo"];
const PRICE_KEYWORDS: &[&str] = &["preco", "valor", "pmc", "custo", "price"];
const DISTRIBUTOR_KEYWORDS: &[&str] = &["distribuidor", "fornecedor", "supplier"];
const MANUFACTURER_KEYWORDS: &[&str] = &["fabricante", "laboratorio", "marca", "manufacturer"];
const NAME_KEYWORDS: &[&str] = &[
    "produto",
    "medicamento",
    "nome",
    "descri",
    "product",
    "item",
];

const FALLBACK_NAME_COLUMN: usize = 0;
const FALLBACK_PRICE_COLUMN: usize = 1;

static PRICE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[,.]\d{2}").expect("price pattern is valid"));

#[derive(Clone, Copy)]
enum Field {
    Ean,
    Price,
    Distributor,
    Manufacturer,
    Name,
}

/// Field precedence when a header matches several keyword lists.
const FIELDS: [(Field, &[&str]); 5] = [
    (Field::Ean, EAN_KEYWORDS),
    (Field::Price, PRICE_KEYWORDS),
    (Field::Distributor, DISTRIBUTOR_KEYWORDS),
    (Field::Manufacturer, MANUFACTURER_KEYWORDS),
    (Field::Name, NAME_KEYWORDS),
];

fn classify(header: &str) -> Option<Field> {
    let header = normalize_header(header);
    if header.is_empty() {
        return None;
    }
    FIELDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| header.contains(k)))
        .map(|(field, _)| *field)
}

fn looks_like_price(cell: &Cell) -> bool {
    match cell {
        Cell::Number(value) => value.fract() != 0.0,
        Cell::Text(text) => {
            text.contains("R$") || PRICE_LIKE.is_match(text)
        }
        Cell::Empty => false,
    }
}

/// Guesses which columns hold the product name, price, EAN, manufacturer and
/// distributor.
///
/// Row 0 is the header. Each header cell goes to the first field whose
/// keywords it contains; the first column wins per field. Without a name
/// header, column 0 is used. Without a price header, the first data row is
/// sniffed for a price-looking cell, falling back to column 1.
pub fn detect_columns(grid: &[Vec<Cell>]) -> Result<ColumnMap, ImportError> {
    let header = grid.first().ok_or(ImportError::EmptySheet)?;

    let mut name = None;
    let mut price = None;
    let mut ean = None;
    let mut manufacturer = None;
    let mut distributor = None;

    for (index, cell) in header.iter().enumerate() {
        let slot = match classify(&cell.as_text()) {
            Some(Field::Ean) => &mut ean,
            Some(Field::Price) => &mut price,
            Some(Field::Distributor) => &mut distributor,
            Some(Field::Manufacturer) => &mut manufacturer,
            Some(Field::Name) => &mut name,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(index);
        }
    }

    let name = name.unwrap_or(FALLBACK_NAME_COLUMN);
    let price = price
        .or_else(|| sniff_price_column(grid.get(1), name, ean))
        .unwrap_or(FALLBACK_PRICE_COLUMN);

    Ok(ColumnMap {
        name,
        price,
        ean,
        manufacturer,
        distributor,
    })
}

fn sniff_price_column(row: Option<&Vec<Cell>>, name: usize, ean: Option<usize>) -> Option<usize> {
    row?.iter()
        .enumerate()
        .filter(|(index, _)| *index != name && Some(*index) != ean)
        .find(|(_, cell)| looks_like_price(cell))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[test]
    fn should_detect_columns_from_portuguese_headers() {
        let grid = vec![
            row(&["Código de Barras", "Descrição", "Laboratório", "Preço Unit."]),
            row(&["7891234567890", "Dipirona 500mg", "EMS", "12,50"]),
        ];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(
            columns,
            ColumnMap {
                name: 1,
                price: 3,
                ean: Some(0),
                manufacturer: Some(2),
                distributor: None,
            }
        );
    }

    #[test]
    fn should_keep_first_column_per_field() {
        let grid = vec![row(&["Produto", "Preço", "Preço Fábrica", "Fornecedor"])];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(columns.price, 1);
        assert_eq!(columns.distributor, Some(3));
    }

    #[test]
    fn should_give_ean_precedence_over_name_keywords() {
        // "codigo do produto" holds both an EAN and a name keyword.
        let grid = vec![row(&["Codigo do Produto", "Nome", "Valor"])];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(columns.ean, Some(0));
        assert_eq!(columns.name, 1);
        assert_eq!(columns.price, 2);
    }

    #[test]
    fn should_sniff_price_from_first_data_row() {
        let grid = vec![
            row(&["Item", "Obs", "Unitario"]),
            row(&["Soro Fisiologico", "caixa", "R$ 4,20"]),
        ];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(columns.name, 0);
        assert_eq!(columns.price, 2);
    }

    #[test]
    fn should_sniff_decimal_text_without_currency_symbol() {
        let grid = vec![
            row(&["Item", "Obs", "Unitario"]),
            row(&["Soro Fisiologico", "cx 10", "4,20"]),
        ];

        let columns = detect_columns(&grid).unwrap();

        assert!(looks_like_price(&Cell::from("12.50")));
        assert!(!looks_like_price(&Cell::from("cx 10")));
        assert_eq!(columns.price, 2);
    }

    #[test]
    fn should_sniff_fractional_numbers() {
        let grid = vec![
            vec![Cell::from("A"), Cell::from("B"), Cell::from("C")],
            vec![Cell::from("Gaze"), Cell::Number(10.0), Cell::Number(3.75)],
        ];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(columns.price, 2);
    }

    #[test]
    fn should_fall_back_to_first_two_columns() {
        let grid = vec![row(&["A", "B"]), row(&["Gaze", "abc"])];

        let columns = detect_columns(&grid).unwrap();

        assert_eq!(columns.name, 0);
        assert_eq!(columns.price, 1);
    }

    #[test]
    fn should_fail_on_empty_grid() {
        let result = detect_columns(&[]);

        assert!(matches!(result.unwrap_err(), ImportError::EmptySheet));
    }
}
