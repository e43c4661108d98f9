use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::price::model::Price;

use crate::db::from_decimal;

#[derive(Debug, FromRow)]
pub struct PriceEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub distributor_id: Uuid,
    pub price: BigDecimal,
    pub min_quantity: i32,
    pub validity: Option<NaiveDate>,
    pub recorded_at: DateTime<Utc>,
}

impl PriceEntity {
    pub fn into_domain(self) -> Price {
        Price::from_repository(
            self.id,
            self.product_id,
            self.distributor_id,
            from_decimal(&self.price),
            u32::try_from(self.min_quantity).unwrap_or(1).max(1),
            self.validity,
            self.recorded_at,
        )
    }
}
