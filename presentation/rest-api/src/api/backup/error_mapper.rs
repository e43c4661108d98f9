use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::backup::errors::BackupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BackupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            BackupError::UnsupportedVersion => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::json("BackupError", "backup.unsupported_version"),
            ),
            BackupError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_unsupported_version_to_unprocessable_entity() {
        let (status, json) = BackupError::UnsupportedVersion.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json.0.message, "backup.unsupported_version");
    }

    #[test]
    fn should_map_duplicated_rows_to_conflict() {
        let (status, _) =
            BackupError::Repository(RepositoryError::Duplicated).into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
    }
}
