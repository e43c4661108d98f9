use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Price;

pub struct CreatePriceParams {
    pub product_id: Uuid,
    pub distributor_id: Uuid,
    pub price: f64,
    pub min_quantity: Option<u32>,
    pub validity: Option<NaiveDate>,
}

#[async_trait]
pub trait CreatePriceUseCase: Send + Sync {
    async fn execute(&self, params: CreatePriceParams) -> Result<Price, PriceError>;
}
