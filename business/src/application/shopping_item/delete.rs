use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::delete::{
    DeleteShoppingItemParams, DeleteShoppingItemUseCase,
};

pub struct DeleteShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingItemUseCase for DeleteShoppingItemUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingItemParams) -> Result<(), ShoppingItemError> {
        self.logger
            .info(&format!("Deleting shopping item: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingItemError::NotFound,
                other => ShoppingItemError::Repository(other),
            })?;

        self.logger
            .info(&format!("Shopping item deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockShoppingItemRepo, arc_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_item_when_exists() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingItemParams { id: Uuid::new_v4() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_item() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingItemParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingItemError::NotFound));
    }
}
