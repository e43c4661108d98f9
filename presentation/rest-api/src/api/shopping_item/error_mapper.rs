use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_item::errors::ShoppingItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            ShoppingItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.name_empty",
            ),
            ShoppingItemError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.invalid_quantity",
            ),
            ShoppingItemError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_item.invalid_price",
            ),
            ShoppingItemError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "shopping_item.not_found")
            }
            ShoppingItemError::ProductNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "shopping_item.product_not_found",
            ),
            ShoppingItemError::DistributorNotFound => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "ReferenceError",
                "shopping_item.distributor_not_found",
            ),
            ShoppingItemError::Repository(err) => return err.into_error_response(),
        };

        (status, ErrorResponse::json(name, message))
    }
}
