use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by name.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Case-insensitive lookup on the trimmed name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_ean(&self, ean: &str) -> Result<Option<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Inserts every product or none of them.
    async fn save_batch(&self, products: &[Product]) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
