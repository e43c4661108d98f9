use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::shopping_item::model::{ShoppingItem, ShoppingList};
use business::domain::shopping_item::use_cases::save_prices::SavePricesReport;

#[derive(Debug, Clone, Object)]
pub struct AddToListRequest {
    /// Product to add; listing it twice bumps the quantity
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateShoppingItemRequest {
    /// New quantity (at least 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    /// New unit price (zero or more)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Distributor to buy from
    #[oai(skip_serializing_if_is_none)]
    pub distributor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    pub id: String,
    pub product_id: String,
    /// Product name when the line was added
    pub product_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub product_ean: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub distributor_id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub distributor_name: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
    /// Latest known quote when the line was added
    #[oai(skip_serializing_if_is_none)]
    pub last_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub last_distributor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            product_ean: item.product_ean,
            distributor_id: item.distributor_id.map(|id| id.to_string()),
            distributor_name: item.distributor_name,
            price: item.price,
            quantity: item.quantity,
            subtotal,
            last_price: item.last_price,
            last_distributor: item.last_distributor,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingItemResponse>,
    /// Sum of price times quantity
    pub total: f64,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            items: list.items.into_iter().map(|i| i.into()).collect(),
            total: list.total,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearListResponse {
    /// Number of lines removed
    pub removed: u64,
}

#[derive(Debug, Clone, Object)]
pub struct SavePricesResponse {
    pub saved: u64,
    pub failed: u64,
}

impl From<SavePricesReport> for SavePricesResponse {
    fn from(report: SavePricesReport) -> Self {
        Self {
            saved: report.saved,
            failed: report.failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_item::model::NewShoppingItemProps;

    #[test]
    fn should_expose_subtotal_of_the_line() {
        let mut item = ShoppingItem::new(NewShoppingItemProps {
            product_id: Uuid::new_v4(),
            product_name: "Dipirona 500mg".to_string(),
            product_ean: None,
            distributor_id: None,
            distributor_name: None,
            price: 2.5,
            last_price: None,
            last_distributor: None,
        })
        .unwrap();
        item.set_quantity(3).unwrap();

        let response = ShoppingItemResponse::from(item);

        assert_eq!(response.subtotal, 7.5);
        assert_eq!(response.quantity, 3);
    }
}
