use persistence::backend::{Repositories, StorageConfig};

/// Open the storage backend chosen by `StorageConfig::from_env`
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional, local store when unset)
/// - MIGRATIONS_PATH: SQL migrations directory (default: "./infrastructure/persistence/migrations")
/// - LOCAL_STORE_PATH: Local JSON store directory (default: "./data")
///
/// # Errors
/// Returns error if the database is unreachable or the local store cannot be created
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Repositories> {
    tracing::info!("Opening storage: {}", config.describe());
    let repositories = Repositories::connect(config).await?;
    Ok(repositories)
}
