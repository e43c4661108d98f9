use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductCategory, ProductUnit};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: String,
    pub unit: String,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.ean,
            self.manufacturer,
            self.category.parse::<ProductCategory>().unwrap_or_default(),
            self.unit.parse::<ProductUnit>().unwrap_or_default(),
            self.created_at,
        )
    }
}
