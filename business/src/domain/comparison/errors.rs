#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("comparison.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
