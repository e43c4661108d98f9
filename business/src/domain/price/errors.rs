#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("price.invalid_value")]
    InvalidValue,
    #[error("price.invalid_min_quantity")]
    InvalidMinQuantity,
    #[error("price.not_found")]
    NotFound,
    #[error("price.product_not_found")]
    ProductNotFound,
    #[error("price.distributor_not_found")]
    DistributorNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
