#[derive(Debug, thiserror::Error)]
pub enum DistributorError {
    #[error("distributor.name_empty")]
    NameEmpty,
    #[error("distributor.not_found")]
    NotFound,
    #[error("distributor.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
