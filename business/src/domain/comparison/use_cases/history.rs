use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::PriceHistory;

pub struct PriceHistoryParams {
    pub product_id: Uuid,
    pub distributor_id: Option<Uuid>,
}

#[async_trait]
pub trait PriceHistoryUseCase: Send + Sync {
    async fn execute(&self, params: PriceHistoryParams) -> Result<PriceHistory, ComparisonError>;
}
