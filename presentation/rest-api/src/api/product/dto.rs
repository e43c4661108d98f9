use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductCategory, ProductUnit};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "referencia")]
    Referencia,
    #[default]
    #[oai(rename = "generico")]
    Generico,
    #[oai(rename = "similar")]
    Similar,
    #[oai(rename = "fitoterapico")]
    Fitoterapico,
    #[oai(rename = "outros")]
    Outros,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Referencia => ProductCategoryDto::Referencia,
            ProductCategory::Generico => ProductCategoryDto::Generico,
            ProductCategory::Similar => ProductCategoryDto::Similar,
            ProductCategory::Fitoterapico => ProductCategoryDto::Fitoterapico,
            ProductCategory::Outros => ProductCategoryDto::Outros,
        }
    }
}

impl From<ProductCategoryDto> for ProductCategory {
    fn from(dto: ProductCategoryDto) -> Self {
        match dto {
            ProductCategoryDto::Referencia => ProductCategory::Referencia,
            ProductCategoryDto::Generico => ProductCategory::Generico,
            ProductCategoryDto::Similar => ProductCategory::Similar,
            ProductCategoryDto::Fitoterapico => ProductCategory::Fitoterapico,
            ProductCategoryDto::Outros => ProductCategory::Outros,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Enum)]
pub enum ProductUnitDto {
    #[default]
    #[oai(rename = "cx")]
    Cx,
    #[oai(rename = "un")]
    Un,
    #[oai(rename = "fr")]
    Fr,
    #[oai(rename = "amp")]
    Amp,
    #[oai(rename = "env")]
    Env,
    #[oai(rename = "tb")]
    Tb,
}

impl From<ProductUnit> for ProductUnitDto {
    fn from(unit: ProductUnit) -> Self {
        match unit {
            ProductUnit::Cx => ProductUnitDto::Cx,
            ProductUnit::Un => ProductUnitDto::Un,
            ProductUnit::Fr => ProductUnitDto::Fr,
            ProductUnit::Amp => ProductUnitDto::Amp,
            ProductUnit::Env => ProductUnitDto::Env,
            ProductUnit::Tb => ProductUnitDto::Tb,
        }
    }
}

impl From<ProductUnitDto> for ProductUnit {
    fn from(dto: ProductUnitDto) -> Self {
        match dto {
            ProductUnitDto::Cx => ProductUnit::Cx,
            ProductUnitDto::Un => ProductUnit::Un,
            ProductUnitDto::Fr => ProductUnit::Fr,
            ProductUnitDto::Amp => ProductUnit::Amp,
            ProductUnitDto::Env => ProductUnit::Env,
            ProductUnitDto::Tb => ProductUnit::Tb,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Product name (cannot be empty, unique ignoring case)
    pub name: String,
    /// Barcode, kept as text
    #[oai(skip_serializing_if_is_none)]
    pub ean: Option<String>,
    /// Laboratory or manufacturer
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer: Option<String>,
    /// Defaults to `generico`
    #[oai(default)]
    pub category: ProductCategoryDto,
    /// Defaults to `cx`
    #[oai(default)]
    pub unit: ProductUnitDto,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub ean: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub manufacturer: Option<String>,
    pub category: ProductCategoryDto,
    pub unit: ProductUnitDto,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            ean: product.ean,
            manufacturer: product.manufacturer,
            category: product.category.into(),
            unit: product.unit.into(),
            created_at: product.created_at,
        }
    }
}
