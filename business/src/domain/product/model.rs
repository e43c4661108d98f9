use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{ProductCategory, ProductUnit};
use crate::domain::shared::text::{contains_ignore_case, name_key, non_blank, normalize_ean};

/// A medication or item being price-compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default)]
    pub unit: ProductUnit,
    pub created_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub ean: Option<String>,
    pub manufacturer: Option<String>,
    pub category: ProductCategory,
    pub unit: ProductUnit,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            ean: normalize_ean(props.ean.as_deref()),
            manufacturer: non_blank(props.manufacturer),
            category: props.category,
            unit: props.unit,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        ean: Option<String>,
        manufacturer: Option<String>,
        category: ProductCategory,
        unit: ProductUnit,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            ean,
            manufacturer,
            category,
            unit,
            created_at,
        }
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Search filter: name, EAN or manufacturer substring.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || contains_ignore_case(&self.name, term)
            || self.ean.as_deref().is_some_and(|e| e.contains(term))
            || self
                .manufacturer
                .as_deref()
                .is_some_and(|m| contains_ignore_case(m, term))
    }
}
