use poem_openapi::Object;

use business::domain::backup::model::TableCounts;

/// Row counts per table.
#[derive(Debug, Clone, Object)]
pub struct TableCountsResponse {
    pub distributors: u64,
    pub products: u64,
    pub prices: u64,
    pub shopping_list: u64,
}

impl From<TableCounts> for TableCountsResponse {
    fn from(counts: TableCounts) -> Self {
        Self {
            distributors: counts.distributors,
            products: counts.products,
            prices: counts.prices,
            shopping_list: counts.shopping_list,
        }
    }
}
