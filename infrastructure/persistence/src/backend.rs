use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use business::domain::distributor::repository::DistributorRepository;
use business::domain::errors::RepositoryError;
use business::domain::price::repository::PriceRepository;
use business::domain::product::repository::ProductRepository;
use business::domain::shopping_item::repository::ShoppingItemRepository;

use crate::db::{DatabaseConfig, DatabaseError, create_postgres_pool, run_migrations};
use crate::distributor::repository::DistributorRepositoryPostgres;
use crate::local::distributor::DistributorRepositoryLocal;
use crate::local::price::PriceRepositoryLocal;
use crate::local::product::ProductRepositoryLocal;
use crate::local::shopping_item::ShoppingItemRepositoryLocal;
use crate::local::store::JsonStore;
use crate::price::repository::PriceRepositoryPostgres;
use crate::product::repository::ProductRepositoryPostgres;
use crate::shopping_item::repository::ShoppingItemRepositoryPostgres;

pub const DEFAULT_LOCAL_STORE_PATH: &str = "./data";
pub const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.database_url_missing")]
    DatabaseUrlMissing,
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("storage.local_store_unavailable")]
    LocalStore(#[source] RepositoryError),
}

/// Storage backend, picked once at startup.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    Postgres {
        database: DatabaseConfig,
        migrations_path: String,
    },
    Local {
        path: PathBuf,
    },
}

impl StorageConfig {
    /// PostgreSQL when `DATABASE_URL` is set, the local store otherwise.
    pub fn from_env() -> Self {
        Self::postgres_from_env().unwrap_or_else(|_| {
            let path = std::env::var("LOCAL_STORE_PATH")
                .unwrap_or_else(|_| DEFAULT_LOCAL_STORE_PATH.to_string());
            tracing::warn!("DATABASE_URL not set, using local store at {path}");
            Self::local(path)
        })
    }

    /// PostgreSQL only; a missing `DATABASE_URL` is an error.
    pub fn postgres_from_env() -> Result<Self, StorageError> {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(StorageError::DatabaseUrlMissing)?;
        let migrations_path = std::env::var("MIGRATIONS_PATH")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self::Postgres {
            database: DatabaseConfig::new(url),
            migrations_path,
        })
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local { path: path.into() }
    }

    pub fn describe(&self) -> String {
        match self {
            StorageConfig::Postgres { .. } => "postgres".to_string(),
            StorageConfig::Local { path } => format!("local store at {}", path.display()),
        }
    }
}

/// One repository per table, all on the same backend.
#[derive(Clone)]
pub struct Repositories {
    pub distributors: Arc<dyn DistributorRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub prices: Arc<dyn PriceRepository>,
    pub shopping_items: Arc<dyn ShoppingItemRepository>,
}

impl Repositories {
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        match config {
            StorageConfig::Postgres {
                database,
                migrations_path,
            } => {
                let pool = create_postgres_pool(database).await?;
                run_migrations(&pool, migrations_path).await?;
                tracing::info!("Connected to PostgreSQL");
                Ok(Self::postgres(pool))
            }
            StorageConfig::Local { path } => {
                let repositories = Self::local(path.clone()).await?;
                tracing::info!("Using local store at {}", path.display());
                Ok(repositories)
            }
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            distributors: Arc::new(DistributorRepositoryPostgres::new(pool.clone())),
            products: Arc::new(ProductRepositoryPostgres::new(pool.clone())),
            prices: Arc::new(PriceRepositoryPostgres::new(pool.clone())),
            shopping_items: Arc::new(ShoppingItemRepositoryPostgres::new(pool)),
        }
    }

    pub async fn local(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let store = Arc::new(
            JsonStore::open(path)
                .await
                .map_err(StorageError::LocalStore)?,
        );

        Ok(Self {
            distributors: Arc::new(DistributorRepositoryLocal::new(store.clone())),
            products: Arc::new(ProductRepositoryLocal::new(store.clone())),
            prices: Arc::new(PriceRepositoryLocal::new(store.clone())),
            shopping_items: Arc::new(ShoppingItemRepositoryLocal::new(store)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn should_connect_local_store_and_share_it_between_tables() {
        let dir = tempdir().unwrap();
        let config = StorageConfig::local(dir.path().join("store"));

        let repositories = Repositories::connect(&config).await.unwrap();

        assert_eq!(repositories.products.count().await.unwrap(), 0);
        assert!(dir.path().join("store").is_dir());
        assert!(config.describe().starts_with("local store at"));
    }
}
