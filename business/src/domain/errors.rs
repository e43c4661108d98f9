/// Storage failures shared by every repository port.
/// Display strings are code-style identifiers so clients can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// Local store IO failure.
    #[error("repository.persistence")]
    Persistence,
    /// Unique key or primary key clash.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    /// A local store file holds something other than a JSON array of records.
    #[error("repository.corrupted_store")]
    CorruptedStore,
}
