use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use uuid::Uuid;

use business::domain::errors::RepositoryError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn json(name: &str, message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            name: name.to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Parses a path id, answering with `message` when it is not a UUID.
pub fn parse_id(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw.trim()).map_err(|_| ErrorResponse::json("ValidationError", message))
}

impl IntoErrorResponse for RepositoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RepositoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            RepositoryError::Duplicated => (StatusCode::CONFLICT, "Conflict"),
            RepositoryError::Persistence
            | RepositoryError::DatabaseError
            | RepositoryError::CorruptedStore => {
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (status, ErrorResponse::json(name, &self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_malformed_id() {
        let result = parse_id("not-a-uuid", "product.invalid_id");

        assert_eq!(result.unwrap_err().0.message, "product.invalid_id");
    }

    #[test]
    fn should_map_corrupted_store_to_internal_error() {
        let (status, json) = RepositoryError::CorruptedStore.into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.corrupted_store");
    }
}
