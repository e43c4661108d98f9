use super::columns::detect_columns;
use super::errors::ImportError;
use super::model::{Cell, InspectReport, InspectedRow};
use super::price_parser::parse_price;
use super::rows::parse_row;

/// Rows shown by the inspection preview.
pub const PREVIEW_ROWS: usize = 5;

static EMPTY: Cell = Cell::Empty;

/// Runs column detection and shows how the first rows would be read.
pub fn inspect(grid: &[Vec<Cell>]) -> Result<InspectReport, ImportError> {
    let columns = detect_columns(grid)?;
    let header = grid
        .first()
        .map(|row| row.iter().map(Cell::as_text).collect())
        .unwrap_or_default();

    let rows = grid
        .iter()
        .enumerate()
        .skip(1)
        .take(PREVIEW_ROWS)
        .map(|(index, row)| {
            let price_cell = row.get(columns.price).unwrap_or(&EMPTY);
            InspectedRow {
                line: index + 1,
                name: row.get(columns.name).map(Cell::as_text).unwrap_or_default(),
                raw_price: price_cell.as_text(),
                price: parse_price(price_cell),
                valid: parse_row(index, row, &columns).is_ok(),
            }
        })
        .collect();

    Ok(InspectReport {
        total_rows: grid.len().saturating_sub(1) as u64,
        header,
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_preview_first_five_rows_only() {
        let mut grid = vec![vec![Cell::from("Produto"), Cell::from("Preço")]];
        for i in 0..8 {
            grid.push(vec![Cell::from(format!("Item {i}").as_str()), Cell::from("R$ 1,50")]);
        }
        grid.push(vec![Cell::from("Zz"), Cell::from("n/d")]);

        let report = inspect(&grid).unwrap();

        assert_eq!(report.total_rows, 9);
        assert_eq!(report.rows.len(), PREVIEW_ROWS);
        assert_eq!(report.rows[0].line, 2);
        assert_eq!(report.rows[0].raw_price, "R$ 1,50");
        assert_eq!(report.rows[0].price, Some(1.5));
        assert!(report.rows[0].valid);
        assert_eq!(report.header, vec!["Produto", "Preço"]);
    }

    #[test]
    fn should_flag_invalid_preview_rows() {
        let grid = vec![
            vec![Cell::from("Produto"), Cell::from("Preço")],
            vec![Cell::from("Dipirona"), Cell::from("consultar")],
        ];

        let report = inspect(&grid).unwrap();

        assert_eq!(report.rows[0].price, None);
        assert!(!report.rows[0].valid);
    }
}
