use async_trait::async_trait;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceView;

#[derive(Default)]
pub struct GetAllPricesParams {
    pub search: Option<String>,
}

#[async_trait]
pub trait GetAllPricesUseCase: Send + Sync {
    async fn execute(&self, params: GetAllPricesParams) -> Result<Vec<PriceView>, PriceError>;
}
