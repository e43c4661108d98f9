use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;

pub struct DeletePriceParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeletePriceUseCase: Send + Sync {
    async fn execute(&self, params: DeletePriceParams) -> Result<(), PriceError>;
}
