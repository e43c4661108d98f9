use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Attachment, AttachmentType, Json},
};

use business::domain::backup::model::Snapshot;
use business::domain::backup::use_cases::clear_all::ClearAllDataUseCase;
use business::domain::backup::use_cases::export::ExportDataUseCase;
use business::domain::backup::use_cases::restore::{RestoreDataParams, RestoreDataUseCase};
use spreadsheet::{SpreadsheetError, snapshot_to_json, snapshot_to_xlsx};

use crate::api::backup::dto::TableCountsResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BackupApi {
    export_use_case: Arc<dyn ExportDataUseCase>,
    restore_use_case: Arc<dyn RestoreDataUseCase>,
    clear_all_use_case: Arc<dyn ClearAllDataUseCase>,
}

impl BackupApi {
    pub fn new(
        export_use_case: Arc<dyn ExportDataUseCase>,
        restore_use_case: Arc<dyn RestoreDataUseCase>,
        clear_all_use_case: Arc<dyn ClearAllDataUseCase>,
    ) -> Self {
        Self {
            export_use_case,
            restore_use_case,
            clear_all_use_case,
        }
    }

    fn file_name(snapshot: &Snapshot, extension: &str) -> String {
        format!(
            "pharmacompare-backup-{}.{}",
            snapshot.exported_at.format("%Y-%m-%d"),
            extension
        )
    }
}

/// Full backup API
#[OpenApi]
impl BackupApi {
    /// Download a JSON backup
    ///
    /// Every table plus `exported_at` and `version`.
    #[oai(path = "/backup", method = "get", tag = "ApiTags::Backup")]
    async fn export_json(&self) -> DownloadBackupResponse {
        let snapshot = match self.export_use_case.execute().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return DownloadBackupResponse::InternalError(json);
            }
        };

        match snapshot_to_json(&snapshot) {
            Ok(bytes) => DownloadBackupResponse::Ok(
                Attachment::new(bytes)
                    .attachment_type(AttachmentType::Attachment)
                    .filename(Self::file_name(&snapshot, "json")),
            ),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DownloadBackupResponse::InternalError(json)
            }
        }
    }

    /// Download a workbook backup
    ///
    /// One sheet per table plus an info sheet.
    #[oai(path = "/backup/workbook", method = "get", tag = "ApiTags::Backup")]
    async fn export_workbook(&self) -> DownloadBackupResponse {
        let snapshot = match self.export_use_case.execute().await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return DownloadBackupResponse::InternalError(json);
            }
        };

        match snapshot_to_xlsx(&snapshot) {
            Ok(bytes) => DownloadBackupResponse::Ok(
                Attachment::new(bytes)
                    .attachment_type(AttachmentType::Attachment)
                    .filename(Self::file_name(&snapshot, "xlsx")),
            ),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DownloadBackupResponse::InternalError(json)
            }
        }
    }

    /// Restore a JSON backup
    ///
    /// Replaces all data with the backup contents, keeping ids and timestamps.
    #[oai(path = "/backup/restore", method = "post", tag = "ApiTags::Backup")]
    async fn restore(&self, body: Json<serde_json::Value>) -> RestoreBackupResponse {
        let snapshot: Snapshot = match serde_json::from_value(body.0) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let (_status, json) = SpreadsheetError::from(err).into_error_response();
                return RestoreBackupResponse::BadRequest(json);
            }
        };

        match self
            .restore_use_case
            .execute(RestoreDataParams { snapshot })
            .await
        {
            Ok(counts) => RestoreBackupResponse::Ok(Json(counts.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => RestoreBackupResponse::Conflict(json),
                    422 => RestoreBackupResponse::UnprocessableEntity(json),
                    _ => RestoreBackupResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete all data
    ///
    /// Empties every table and answers with the removed row counts.
    #[oai(path = "/data", method = "delete", tag = "ApiTags::Backup")]
    async fn clear_all(&self) -> ClearAllDataResponse {
        match self.clear_all_use_case.execute().await {
            Ok(counts) => ClearAllDataResponse::Ok(Json(counts.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearAllDataResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadBackupResponse {
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RestoreBackupResponse {
    #[oai(status = 200)]
    Ok(Json<TableCountsResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearAllDataResponse {
    #[oai(status = 200)]
    Ok(Json<TableCountsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
