use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ShoppingItemError;

/// A line of the shopping list.
///
/// Product and distributor names are snapshots taken when the line is
/// created or its distributor changes; they are not kept in sync with later
/// renames. `last_price` and `last_distributor` record the latest known quote
/// at the moment the product was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    #[serde(default)]
    pub product_ean: Option<String>,
    #[serde(default)]
    pub distributor_id: Option<Uuid>,
    #[serde(default)]
    pub distributor_name: Option<String>,
    #[serde(default)]
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub last_distributor: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewShoppingItemProps {
    pub product_id: Uuid,
    pub product_name: String,
    pub product_ean: Option<String>,
    pub distributor_id: Option<Uuid>,
    pub distributor_name: Option<String>,
    pub price: f64,
    pub last_price: Option<f64>,
    pub last_distributor: Option<String>,
}

fn check_price(price: f64) -> Result<f64, ShoppingItemError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ShoppingItemError::InvalidPrice)
    }
}

impl ShoppingItem {
    /// New line with quantity 1.
    pub fn new(props: NewShoppingItemProps) -> Result<Self, ShoppingItemError> {
        let product_name = props.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        let price = check_price(props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            product_id: props.product_id,
            product_name,
            product_ean: props.product_ean,
            distributor_id: props.distributor_id,
            distributor_name: props.distributor_name,
            price,
            quantity: 1,
            last_price: props.last_price,
            last_distributor: props.last_distributor,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        product_name: String,
        product_ean: Option<String>,
        distributor_id: Option<Uuid>,
        distributor_name: Option<String>,
        price: f64,
        quantity: u32,
        last_price: Option<f64>,
        last_distributor: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product_id,
            product_name,
            product_ean,
            distributor_id,
            distributor_name,
            price,
            quantity,
            last_price,
            last_distributor,
            created_at,
            updated_at,
        }
    }

    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), ShoppingItemError> {
        if quantity < 1 {
            return Err(ShoppingItemError::InvalidQuantity);
        }
        self.quantity = quantity;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
        self.updated_at = Utc::now();
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), ShoppingItemError> {
        self.price = check_price(price)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_distributor(&mut self, distributor_id: Uuid, distributor_name: String) {
        self.distributor_id = Some(distributor_id);
        self.distributor_name = Some(distributor_name);
        self.updated_at = Utc::now();
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The list together with its running total.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
    pub total: f64,
}

impl ShoppingList {
    pub fn new(items: Vec<ShoppingItem>) -> Self {
        let total = items.iter().map(ShoppingItem::subtotal).sum();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewShoppingItemProps {
        NewShoppingItemProps {
            product_id: Uuid::new_v4(),
            product_name: name.to_string(),
            product_ean: None,
            distributor_id: None,
            distributor_name: None,
            price,
            last_price: None,
            last_distributor: None,
        }
    }

    #[test]
    fn should_create_item_with_quantity_one() {
        let item = ShoppingItem::new(props("Dipirona 500mg", 12.5)).unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.product_name, "Dipirona 500mg");
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = ShoppingItem::new(props("   ", 1.0));

        assert!(matches!(result.unwrap_err(), ShoppingItemError::NameEmpty));
    }

    #[test]
    fn should_accept_zero_price_but_reject_negative() {
        assert!(ShoppingItem::new(props("Soro", 0.0)).is_ok());

        let result = ShoppingItem::new(props("Soro", -1.0));
        assert!(matches!(result.unwrap_err(), ShoppingItemError::InvalidPrice));
    }

    #[test]
    fn should_reject_zero_quantity() {
        let mut item = ShoppingItem::new(props("Soro", 2.0)).unwrap();

        let result = item.set_quantity(0);

        assert!(matches!(result.unwrap_err(), ShoppingItemError::InvalidQuantity));
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn should_sum_price_times_quantity() {
        let mut first = ShoppingItem::new(props("Soro", 2.5)).unwrap();
        first.set_quantity(4).unwrap();
        let second = ShoppingItem::new(props("Gaze", 3.0)).unwrap();

        let list = ShoppingList::new(vec![first, second]);

        assert_eq!(list.total, 13.0);
    }
}
