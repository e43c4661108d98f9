use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::distributor::errors::DistributorError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DistributorError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            DistributorError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::json("ValidationError", "distributor.name_empty"),
            ),
            DistributorError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::json("NotFound", "distributor.not_found"),
            ),
            DistributorError::AlreadyExists => (
                StatusCode::CONFLICT,
                ErrorResponse::json("Conflict", "distributor.already_exists"),
            ),
            DistributorError::Repository(err) => err.into_error_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_duplicate_name_to_conflict() {
        let (status, json) = DistributorError::AlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "distributor.already_exists");
    }

    #[test]
    fn should_surface_backend_failures_as_internal_error() {
        let (status, json) =
            DistributorError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
