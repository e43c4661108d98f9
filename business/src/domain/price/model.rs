use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::PriceError;
use crate::domain::distributor::model::Distributor;
use crate::domain::product::model::Product;
use crate::domain::shared::text::contains_ignore_case;

fn default_min_quantity() -> u32 {
    1
}

/// One timestamped quote of a product from a distributor.
///
/// History is modeled as several rows per (product, distributor) pair;
/// the row with the latest `recorded_at` is the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub id: Uuid,
    pub product_id: Uuid,
    pub distributor_id: Uuid,
    pub price: f64,
    #[serde(default = "default_min_quantity")]
    pub min_quantity: u32,
    #[serde(default)]
    pub validity: Option<NaiveDate>,
    pub recorded_at: DateTime<Utc>,
}

pub struct NewPriceProps {
    pub product_id: Uuid,
    pub distributor_id: Uuid,
    pub price: f64,
    pub min_quantity: Option<u32>,
    pub validity: Option<NaiveDate>,
}

/// Finite and strictly positive.
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Price {
    pub fn new(props: NewPriceProps) -> Result<Self, PriceError> {
        if !is_valid_price(props.price) {
            return Err(PriceError::InvalidValue);
        }

        let min_quantity = props.min_quantity.unwrap_or(1);
        if min_quantity == 0 {
            return Err(PriceError::InvalidMinQuantity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            product_id: props.product_id,
            distributor_id: props.distributor_id,
            price: props.price,
            min_quantity,
            validity: props.validity,
            recorded_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        distributor_id: Uuid,
        price: f64,
        min_quantity: u32,
        validity: Option<NaiveDate>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            distributor_id,
            price,
            min_quantity,
            validity,
            recorded_at,
        }
    }
}

/// A price row together with the names of the records it references.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceView {
    pub price: Price,
    pub product_name: Option<String>,
    pub distributor_name: Option<String>,
}

impl PriceView {
    /// Search filter: product name or distributor name substring.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty()
            || self
                .product_name
                .as_deref()
                .is_some_and(|n| contains_ignore_case(n, term))
            || self
                .distributor_name
                .as_deref()
                .is_some_and(|n| contains_ignore_case(n, term))
    }
}

/// Attaches product and distributor names to price rows, keeping their order.
///
/// Rows pointing at missing records keep `None` names.
pub fn join_prices(
    prices: Vec<Price>,
    products: &[Product],
    distributors: &[Distributor],
) -> Vec<PriceView> {
    let product_names: HashMap<Uuid, &str> =
        products.iter().map(|p| (p.id, p.name.as_str())).collect();
    let distributor_names: HashMap<Uuid, &str> = distributors
        .iter()
        .map(|d| (d.id, d.name.as_str()))
        .collect();

    prices
        .into_iter()
        .map(|price| PriceView {
            product_name: product_names.get(&price.product_id).map(|n| n.to_string()),
            distributor_name: distributor_names
                .get(&price.distributor_id)
                .map(|n| n.to_string()),
            price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::distributor::model::NewDistributorProps;
    use crate::domain::product::model::NewProductProps;

    fn props(price: f64, min_quantity: Option<u32>) -> NewPriceProps {
        NewPriceProps {
            product_id: Uuid::new_v4(),
            distributor_id: Uuid::new_v4(),
            price,
            min_quantity,
            validity: None,
        }
    }

    #[test]
    fn should_create_price_with_default_min_quantity() {
        let price = Price::new(props(20.5, None)).unwrap();

        assert_eq!(price.min_quantity, 1);
        assert_eq!(price.price, 20.5);
    }

    #[test]
    fn should_reject_non_positive_or_nan_values() {
        for value in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let result = Price::new(props(value, None));
            assert!(matches!(result.unwrap_err(), PriceError::InvalidValue));
        }
    }

    #[test]
    fn should_reject_zero_min_quantity() {
        let result = Price::new(props(10.0, Some(0)));

        assert!(matches!(result.unwrap_err(), PriceError::InvalidMinQuantity));
    }

    #[test]
    fn should_join_names_and_keep_missing_references_empty() {
        let product = Product::new(NewProductProps {
            name: "Dipirona".to_string(),
            ean: None,
            manufacturer: None,
            category: Default::default(),
            unit: Default::default(),
        })
        .unwrap();
        let distributor = Distributor::new(NewDistributorProps {
            name: "Santa Cruz".to_string(),
            cnpj: None,
            contact: None,
            notes: None,
        })
        .unwrap();
        let known = Price::new(NewPriceProps {
            product_id: product.id,
            distributor_id: distributor.id,
            price: 9.9,
            min_quantity: None,
            validity: None,
        })
        .unwrap();
        let orphan = Price::new(props(5.0, None)).unwrap();

        let views = join_prices(vec![known, orphan], &[product], &[distributor]);

        assert_eq!(views[0].product_name.as_deref(), Some("Dipirona"));
        assert_eq!(views[0].distributor_name.as_deref(), Some("Santa Cruz"));
        assert!(views[1].product_name.is_none());
        assert!(views[0].matches("santa"));
        assert!(!views[1].matches("santa"));
    }
}
