use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::NameAlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.name_already_exists",
            ),
            ProductError::EanAlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "product.ean_already_exists",
            ),
            ProductError::Repository(err) => return err.into_error_response(),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_duplicate_ean_to_conflict() {
        let (status, json) = ProductError::EanAlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "product.ean_already_exists");
    }

    #[test]
    fn should_map_missing_product_to_not_found() {
        let (status, _) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
