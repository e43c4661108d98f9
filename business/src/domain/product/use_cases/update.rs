use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductCategory, ProductUnit};

pub struct UpdateProductParams {
    pub id: Uuid,
    pub name: String,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: ProductCategory,
    pub unit: ProductUnit,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
