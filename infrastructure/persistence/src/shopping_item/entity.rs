use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shopping_item::model::ShoppingItem;

use crate::db::from_decimal;

#[derive(Debug, FromRow)]
pub struct ShoppingItemEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_ean: Option<String>,
    pub distributor_id: Option<Uuid>,
    pub distributor_name: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub last_price: Option<BigDecimal>,
    pub last_distributor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingItemEntity {
    pub fn into_domain(self) -> ShoppingItem {
        ShoppingItem::from_repository(
            self.id,
            self.product_id,
            self.product_name,
            self.product_ean,
            self.distributor_id,
            self.distributor_name,
            from_decimal(&self.price),
            u32::try_from(self.quantity).unwrap_or(1).max(1),
            self.last_price.as_ref().map(from_decimal),
            self.last_distributor,
            self.created_at,
            self.updated_at,
        )
    }
}
