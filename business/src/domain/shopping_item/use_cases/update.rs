use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct UpdateShoppingItemParams {
    pub id: Uuid,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub distributor_id: Option<Uuid>,
}

#[async_trait]
pub trait UpdateShoppingItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
