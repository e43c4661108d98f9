use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::import::errors::ImportError;
use spreadsheet::SpreadsheetError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ImportError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            ImportError::EmptySheet => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ImportError",
                "import.empty_sheet",
            ),
            ImportError::DistributorNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "import.distributor_not_found",
            ),
            ImportError::DistributorNameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "import.distributor_name_empty",
            ),
            ImportError::Repository(err) => return err.into_error_response(),
        };

        (status, ErrorResponse::json(name, message))
    }
}

impl IntoErrorResponse for SpreadsheetError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match self {
            SpreadsheetError::UnsupportedFormat(_) | SpreadsheetError::Json(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            SpreadsheetError::Csv(_)
            | SpreadsheetError::Workbook(_)
            | SpreadsheetError::NoSheets => (StatusCode::UNPROCESSABLE_ENTITY, "ImportError"),
            SpreadsheetError::Io(_) | SpreadsheetError::Write(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::json(name, &message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_empty_sheet_to_unprocessable_entity() {
        let (status, json) = ImportError::EmptySheet.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "import.empty_sheet");
    }

    #[test]
    fn should_map_unknown_extension_to_bad_request() {
        let (status, json) =
            SpreadsheetError::UnsupportedFormat("pdf".to_string()).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "spreadsheet.unsupported_format");
    }

    #[test]
    fn should_map_missing_sheets_to_unprocessable_entity() {
        let (status, _) = SpreadsheetError::NoSheets.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
