#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("import.empty_sheet")]
    EmptySheet,
    #[error("import.distributor_not_found")]
    DistributorNotFound,
    #[error("import.distributor_name_empty")]
    DistributorNameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
