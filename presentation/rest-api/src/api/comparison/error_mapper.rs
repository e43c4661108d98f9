use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::comparison::errors::ComparisonError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ComparisonError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ComparisonError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::json("NotFound", "comparison.product_not_found"),
            ),
            ComparisonError::Repository(err) => err.into_error_response(),
        }
    }
}
