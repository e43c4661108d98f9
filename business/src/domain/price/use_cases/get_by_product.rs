use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceView;

pub struct GetPricesByProductParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetPricesByProductUseCase: Send + Sync {
    async fn execute(&self, params: GetPricesByProductParams)
    -> Result<Vec<PriceView>, PriceError>;
}
