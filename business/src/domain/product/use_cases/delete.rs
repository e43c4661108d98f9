use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Removes the product and returns how many price rows were cascaded.
    async fn execute(&self, params: DeleteProductParams) -> Result<u64, ProductError>;
}
