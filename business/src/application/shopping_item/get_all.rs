use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingList;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::get_all::GetShoppingListUseCase;

pub struct GetShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListUseCase for GetShoppingListUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingList, ShoppingItemError> {
        self.logger.debug("Loading shopping list");

        let items = self.repository.get_all().await?;
        Ok(ShoppingList::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockShoppingItemRepo, arc_logger, make_item};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_items_with_running_total() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                make_item(Uuid::new_v4(), "Dipirona", 2.5, 2),
                make_item(Uuid::new_v4(), "Gaze", 1.0, 3),
            ])
        });

        let use_case = GetShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let list = use_case.execute().await.unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.total, 8.0);
    }
}
