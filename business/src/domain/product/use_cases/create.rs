use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ProductCategory, ProductUnit};

pub struct CreateProductParams {
    pub name: String,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: ProductCategory,
    pub unit: ProductUnit,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
