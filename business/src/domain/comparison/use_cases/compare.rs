use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::PriceComparison;

pub struct ComparePricesParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait ComparePricesUseCase: Send + Sync {
    async fn execute(&self, params: ComparePricesParams)
    -> Result<PriceComparison, ComparisonError>;
}
