//! Text normalization shared by lookups, search filters and the import heuristic.

/// Replaces accented Latin letters with their unaccented base letter.
///
/// Covers the diacritics found in Portuguese spreadsheet headers
/// (`Preço`, `Descrição`, `Código`, ...). Other characters pass through.
pub fn fold_accents(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

/// Lowercased, accent-free, trimmed form of a spreadsheet header cell.
pub fn normalize_header(value: &str) -> String {
    fold_accents(&value.trim().to_lowercase())
}

/// Key used for case-insensitive uniqueness of names.
///
/// `"Dipirona"` and `"dipirona "` share the key `"dipirona"`.
pub fn name_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Keeps only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Trims the value and maps blank strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Canonical EAN form: digits only, `None` when nothing is left.
pub fn normalize_ean(value: Option<&str>) -> Option<String> {
    let digits = digits_only(value?);
    (!digits.is_empty()).then_some(digits)
}

/// Case-insensitive substring test used by list filters.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
