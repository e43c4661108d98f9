use async_trait::async_trait;

use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingList;

#[async_trait]
pub trait GetShoppingListUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingList, ShoppingItemError>;
}
