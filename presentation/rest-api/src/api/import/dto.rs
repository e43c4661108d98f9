use poem_openapi::{Multipart, Object, types::multipart::Upload};

use business::domain::import::model::{
    CatalogReport, ColumnMap, ImportReport, InspectReport, InspectedRow,
};

#[derive(Debug, Multipart)]
pub struct PriceListUpload {
    /// `.csv`, `.xlsx` or `.xls` file
    pub file: Upload,
    /// Existing distributor for rows without a distributor column
    pub distributor_id: Option<String>,
    /// Distributor looked up by name, created when unknown
    pub distributor_name: Option<String>,
}

#[derive(Debug, Multipart)]
pub struct SheetUpload {
    /// `.csv`, `.xlsx` or `.xls` file
    pub file: Upload,
}

/// Zero-based column indexes detected from the header row.
#[derive(Debug, Clone, Object)]
pub struct ColumnMapResponse {
    pub name: u32,
    pub price: u32,
    #[oai(skip_serializing_if_is_none)]
    pub ean: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub distributor: Option<u32>,
}

fn index(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

impl From<ColumnMap> for ColumnMapResponse {
    fn from(columns: ColumnMap) -> Self {
        Self {
            name: index(columns.name),
            price: index(columns.price),
            ean: columns.ean.map(index),
            manufacturer: columns.manufacturer.map(index),
            distributor: columns.distributor.map(index),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ImportReportResponse {
    pub total_rows: u64,
    pub imported_prices: u64,
    /// Rows without a name or a positive price
    pub rejected_rows: u64,
    /// Rows lost to failed batches or unresolved products
    pub failed_inserts: u64,
    pub products_created: u64,
    pub products_reused: u64,
    pub distributors_created: u64,
    pub eans_backfilled: u64,
    pub columns: ColumnMapResponse,
}

impl From<ImportReport> for ImportReportResponse {
    fn from(report: ImportReport) -> Self {
        Self {
            total_rows: report.total_rows,
            imported_prices: report.imported_prices,
            rejected_rows: report.rejected_rows,
            failed_inserts: report.failed_inserts,
            products_created: report.products_created,
            products_reused: report.products_reused,
            distributors_created: report.distributors_created,
            eans_backfilled: report.eans_backfilled,
            columns: report.columns.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogReportResponse {
    pub total_rows: u64,
    pub inserted: u64,
    /// Already known by name or EAN
    pub skipped: u64,
    pub invalid: u64,
    pub failed: u64,
    pub columns: ColumnMapResponse,
}

impl From<CatalogReport> for CatalogReportResponse {
    fn from(report: CatalogReport) -> Self {
        Self {
            total_rows: report.total_rows,
            inserted: report.inserted,
            skipped: report.skipped,
            invalid: report.invalid,
            failed: report.failed,
            columns: report.columns.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct InspectedRowResponse {
    /// One-based spreadsheet line
    pub line: u32,
    pub name: String,
    pub raw_price: String,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    pub valid: bool,
}

impl From<InspectedRow> for InspectedRowResponse {
    fn from(row: InspectedRow) -> Self {
        Self {
            line: index(row.line),
            name: row.name,
            raw_price: row.raw_price,
            price: row.price,
            valid: row.valid,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct InspectReportResponse {
    pub total_rows: u64,
    pub header: Vec<String>,
    pub columns: ColumnMapResponse,
    pub rows: Vec<InspectedRowResponse>,
}

impl From<InspectReport> for InspectReportResponse {
    fn from(report: InspectReport) -> Self {
        Self {
            total_rows: report.total_rows,
            header: report.header,
            columns: report.columns.into(),
            rows: report.rows.into_iter().map(|r| r.into()).collect(),
        }
    }
}
