use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json, types::multipart::Upload};

use business::domain::import::inspect::inspect as inspect_sheet;
use business::domain::import::model::{Cell, DEFAULT_DISTRIBUTOR_NAME, DistributorSelection};
use business::domain::import::use_cases::import_catalog::{
    ImportCatalogParams, ImportCatalogUseCase,
};
use business::domain::import::use_cases::import_prices::{
    ImportPriceListParams, ImportPriceListUseCase,
};
use business::domain::shared::text::non_blank;
use spreadsheet::{SheetFormat, SpreadsheetError, read_rows_from_bytes};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::import::dto::{
    CatalogReportResponse, ImportReportResponse, InspectReportResponse, PriceListUpload,
    SheetUpload,
};
use crate::api::tags::ApiTags;

pub struct ImportApi {
    import_prices_use_case: Arc<dyn ImportPriceListUseCase>,
    import_catalog_use_case: Arc<dyn ImportCatalogUseCase>,
}

impl ImportApi {
    pub fn new(
        import_prices_use_case: Arc<dyn ImportPriceListUseCase>,
        import_catalog_use_case: Arc<dyn ImportCatalogUseCase>,
    ) -> Self {
        Self {
            import_prices_use_case,
            import_catalog_use_case,
        }
    }
}

/// Reads the uploaded sheet into a cell grid; the format comes from the file name.
async fn read_upload(upload: Upload) -> Result<Vec<Vec<Cell>>, (StatusCode, Json<ErrorResponse>)> {
    let format = SheetFormat::from_file_name(upload.file_name().unwrap_or_default())
        .map_err(|err| err.into_error_response())?;
    let bytes = upload
        .into_vec()
        .await
        .map_err(|err| SpreadsheetError::Io(err).into_error_response())?;

    tokio::task::spawn_blocking(move || read_rows_from_bytes(bytes, format))
        .await
        .map_err(|err| {
            tracing::error!("Spreadsheet reader task failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::json("InternalError", "spreadsheet.unreadable_file"),
            )
        })?
        .map_err(|err| err.into_error_response())
}

/// Smart spreadsheet import API
///
/// Columns are detected from the header row (name, price, EAN, manufacturer,
/// distributor). Rows without a name or a positive price are counted and skipped.
#[OpenApi]
impl ImportApi {
    /// Import a price list
    ///
    /// Rows without a distributor column go to `distributor_id`, or to
    /// `distributor_name` (created when unknown), or to "Planilha Principal".
    #[oai(path = "/import/prices", method = "post", tag = "ApiTags::Import")]
    async fn import_prices(&self, upload: PriceListUpload) -> ImportPricesResponse {
        let distributor = match non_blank(upload.distributor_id) {
            Some(raw) => match parse_id(&raw, "distributor.invalid_id") {
                Ok(id) => DistributorSelection::Id(id),
                Err(json) => return ImportPricesResponse::BadRequest(json),
            },
            None => DistributorSelection::Name(
                non_blank(upload.distributor_name)
                    .unwrap_or_else(|| DEFAULT_DISTRIBUTOR_NAME.to_string()),
            ),
        };

        let rows = match read_upload(upload.file).await {
            Ok(rows) => rows,
            Err((status, json)) => return ImportPricesResponse::from_status(status, json),
        };

        match self
            .import_prices_use_case
            .execute(ImportPriceListParams { rows, distributor })
            .await
        {
            Ok(report) => ImportPricesResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                ImportPricesResponse::from_status(status, json)
            }
        }
    }

    /// Import a product catalog
    ///
    /// Creates products not yet known by name or EAN; prices are ignored.
    #[oai(path = "/import/catalog", method = "post", tag = "ApiTags::Import")]
    async fn import_catalog(&self, upload: SheetUpload) -> ImportCatalogResponse {
        let rows = match read_upload(upload.file).await {
            Ok(rows) => rows,
            Err((status, json)) => return ImportCatalogResponse::from_status(status, json),
        };

        match self
            .import_catalog_use_case
            .execute(ImportCatalogParams { rows })
            .await
        {
            Ok(report) => ImportCatalogResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                ImportCatalogResponse::from_status(status, json)
            }
        }
    }

    /// Inspect a spreadsheet
    ///
    /// Shows the detected columns and how the first rows would be read. Nothing is stored.
    #[oai(path = "/import/inspect", method = "post", tag = "ApiTags::Import")]
    async fn inspect(&self, upload: SheetUpload) -> InspectSheetResponse {
        let rows = match read_upload(upload.file).await {
            Ok(rows) => rows,
            Err((status, json)) => return InspectSheetResponse::from_status(status, json),
        };

        match inspect_sheet(&rows) {
            Ok(report) => InspectSheetResponse::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                InspectSheetResponse::from_status(status, json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImportPricesResponse {
    #[oai(status = 200)]
    Ok(Json<ImportReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ImportPricesResponse {
    fn from_status(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            422 => Self::UnprocessableEntity(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ImportCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ImportCatalogResponse {
    fn from_status(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            422 => Self::UnprocessableEntity(json),
            _ => Self::InternalError(json),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum InspectSheetResponse {
    #[oai(status = 200)]
    Ok(Json<InspectReportResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl InspectSheetResponse {
    fn from_status(status: StatusCode, json: Json<ErrorResponse>) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            422 => Self::UnprocessableEntity(json),
            _ => Self::InternalError(json),
        }
    }
}
