use super::model::Cell;

/// Reads a price out of a cell.
///
/// Numbers are taken as-is. Text accepts Brazilian and plain formats:
/// `"20,50"`, `"R$ 1.234,56"`, `"1.234.567"`, `"12.90"`. Returns `None` when
/// nothing numeric is left. Positivity is checked by the caller.
pub fn parse_price(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(value) => Some(*value),
        Cell::Text(text) => parse_price_text(text),
    }
}

pub fn parse_price_text(text: &str) -> Option<f64> {
    let stripped: String = text
        .replace("R$", "")
        .replace("r$", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let commas = stripped.matches(',').count();
    let dots = stripped.matches('.').count();

    let normalized = if commas > 0 && dots > 0 {
        stripped.replace('.', "").replace(',', ".")
    } else if commas == 1 {
        stripped.replace(',', ".")
    } else if commas > 1 {
        stripped.replace(',', "")
    } else if dots > 1 {
        stripped.replace('.', "")
    } else {
        stripped
    };

    let cleaned: String = normalized
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| !v.is_nan())
}
