use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Price;

/// Edits a quote in place; `recorded_at` is kept.
pub struct UpdatePriceParams {
    pub id: Uuid,
    pub distributor_id: Option<Uuid>,
    pub price: f64,
    pub min_quantity: Option<u32>,
    pub validity: Option<NaiveDate>,
}

#[async_trait]
pub trait UpdatePriceUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePriceParams) -> Result<Price, PriceError>;
}
