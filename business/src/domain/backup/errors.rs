#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup.unsupported_version")]
    UnsupportedVersion,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
