#[derive(Debug, thiserror::Error)]
pub enum ShoppingItemError {
    #[error("shopping_item.name_empty")]
    NameEmpty,
    #[error("shopping_item.invalid_quantity")]
    InvalidQuantity,
    #[error("shopping_item.invalid_price")]
    InvalidPrice,
    #[error("shopping_item.not_found")]
    NotFound,
    #[error("shopping_item.product_not_found")]
    ProductNotFound,
    #[error("shopping_item.distributor_not_found")]
    DistributorNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
