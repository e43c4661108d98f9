use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::distributor::errors::DistributorError;

pub struct DeleteDistributorParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteDistributorUseCase: Send + Sync {
    /// Removes the distributor and returns how many price rows were cascaded.
    async fn execute(&self, params: DeleteDistributorParams) -> Result<u64, DistributorError>;
}
