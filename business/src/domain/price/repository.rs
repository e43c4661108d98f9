use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Price;

#[async_trait]
pub trait PriceRepository: Send + Sync {
    /// All prices, most recent first.
    async fn get_all(&self) -> Result<Vec<Price>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError>;
    /// Prices of one product, most recent first.
    async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Price>, RepositoryError>;
    /// Prices of one product (optionally one distributor), oldest first.
    async fn get_history(
        &self,
        product_id: Uuid,
        distributor_id: Option<Uuid>,
    ) -> Result<Vec<Price>, RepositoryError>;
    async fn save(&self, price: &Price) -> Result<(), RepositoryError>;
    /// Inserts every price or none of them.
    async fn save_batch(&self, prices: &[Price]) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, RepositoryError>;
    async fn delete_by_distributor(&self, distributor_id: Uuid) -> Result<u64, RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
