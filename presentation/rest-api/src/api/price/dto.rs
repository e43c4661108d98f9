use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::price::model::{Price, PriceView};

#[derive(Debug, Clone, Object)]
pub struct CreatePriceRequest {
    pub product_id: Uuid,
    pub distributor_id: Uuid,
    /// Unit price, strictly positive
    pub price: f64,
    /// Minimum order quantity, defaults to 1
    #[oai(skip_serializing_if_is_none)]
    pub min_quantity: Option<u32>,
    /// Last day the quote is valid
    #[oai(skip_serializing_if_is_none)]
    pub validity: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePriceRequest {
    /// Moves the quote to another distributor
    #[oai(skip_serializing_if_is_none)]
    pub distributor_id: Option<Uuid>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub min_quantity: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub validity: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
pub struct PriceResponse {
    pub id: String,
    pub product_id: String,
    pub distributor_id: String,
    pub price: f64,
    pub min_quantity: u32,
    #[oai(skip_serializing_if_is_none)]
    pub validity: Option<NaiveDate>,
    pub recorded_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub product_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub distributor_name: Option<String>,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            id: price.id.to_string(),
            product_id: price.product_id.to_string(),
            distributor_id: price.distributor_id.to_string(),
            price: price.price,
            min_quantity: price.min_quantity,
            validity: price.validity,
            recorded_at: price.recorded_at,
            product_name: None,
            distributor_name: None,
        }
    }
}

impl From<PriceView> for PriceResponse {
    fn from(view: PriceView) -> Self {
        Self {
            product_name: view.product_name,
            distributor_name: view.distributor_name,
            ..PriceResponse::from(view.price)
        }
    }
}
