use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price::errors::PriceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for PriceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            PriceError::InvalidValue => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "price.invalid_value",
            ),
            PriceError::InvalidMinQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "price.invalid_min_quantity",
            ),
            PriceError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "price.not_found"),
            PriceError::ProductNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "price.product_not_found",
            ),
            PriceError::DistributorNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "price.distributor_not_found",
            ),
            PriceError::Repository(err) => return err.into_error_response(),
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_value_to_bad_request() {
        let (status, json) = PriceError::InvalidValue.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "price.invalid_value");
    }

    #[test]
    fn should_map_unknown_references_to_unprocessable_entity() {
        let (status, _) = PriceError::DistributorNotFound.into_error_response();

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
