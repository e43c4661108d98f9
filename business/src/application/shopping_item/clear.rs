use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::clear::ClearShoppingListUseCase;

pub struct ClearShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearShoppingListUseCase for ClearShoppingListUseCaseImpl {
    async fn execute(&self) -> Result<u64, ShoppingItemError> {
        self.logger.info("Clearing shopping list");

        let count = self.repository.delete_all().await?;

        self.logger
            .info(&format!("Cleared {} shopping items", count));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_utils::{MockShoppingItemRepo, arc_logger};

    #[tokio::test]
    async fn should_return_count_of_cleared_items() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo.expect_delete_all().returning(|| Ok(3));

        let use_case = ClearShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        assert_eq!(use_case.execute().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo
            .expect_delete_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = ClearShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        assert!(use_case.execute().await.is_err());
    }
}
