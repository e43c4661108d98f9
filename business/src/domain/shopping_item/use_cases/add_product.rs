use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

pub struct AddProductToListParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddProductToListUseCase: Send + Sync {
    /// Adds the product, or bumps its quantity when it is already listed.
    async fn execute(
        &self,
        params: AddProductToListParams,
    ) -> Result<ShoppingItem, ShoppingItemError>;
}
