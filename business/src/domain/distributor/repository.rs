use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Distributor;

#[async_trait]
pub trait DistributorRepository: Send + Sync {
    /// All distributors ordered by name.
    async fn get_all(&self) -> Result<Vec<Distributor>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Distributor, RepositoryError>;
    /// Case-insensitive lookup on the trimmed name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, RepositoryError>;
    async fn save(&self, distributor: &Distributor) -> Result<(), RepositoryError>;
    async fn save_batch(&self, distributors: &[Distributor]) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
