use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;
use crate::domain::shopping_item::use_cases::update::{
    UpdateShoppingItemParams, UpdateShoppingItemUseCase,
};

pub struct UpdateShoppingItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingItemRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingItemUseCase for UpdateShoppingItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Updating shopping item: {}", params.id));

        let mut item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingItemError::NotFound,
                other => ShoppingItemError::Repository(other),
            })?;

        if let Some(quantity) = params.quantity {
            item.set_quantity(quantity)?;
        }
        if let Some(price) = params.price {
            item.set_price(price)?;
        }
        if let Some(distributor_id) = params.distributor_id {
            let distributor = self
                .distributor_repository
                .get_by_id(distributor_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ShoppingItemError::DistributorNotFound,
                    other => ShoppingItemError::Repository(other),
                })?;
            item.set_distributor(distributor.id, distributor.name);
        }

        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Shopping item updated: {}", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDistributorRepo, MockShoppingItemRepo, arc_logger, make_distributor, make_item,
    };
    use uuid::Uuid;

    #[tokio::test]
    async fn should_update_quantity_price_and_distributor_name() {
        let item = make_item(Uuid::new_v4(), "Dipirona", 5.0, 1);
        let id = item.id;
        let mut mock_repo = MockShoppingItemRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| Ok(item.clone()));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        mock_distributor_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_distributor(id, "Profarma")));

        let use_case = UpdateShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let updated = use_case
            .execute(UpdateShoppingItemParams {
                id,
                quantity: Some(4),
                price: Some(4.25),
                distributor_id: Some(Uuid::new_v4()),
            })
            .await
            .unwrap();

        assert_eq!(updated.quantity, 4);
        assert_eq!(updated.price, 4.25);
        assert_eq!(updated.distributor_name.as_deref(), Some("Profarma"));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_saving() {
        let item = make_item(Uuid::new_v4(), "Dipirona", 5.0, 1);
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| Ok(item.clone()));
        mock_repo.expect_save().never();

        let use_case = UpdateShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(UpdateShoppingItemParams {
                id: Uuid::new_v4(),
                quantity: Some(0),
                price: None,
                distributor_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingItemError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_reject_negative_price() {
        let item = make_item(Uuid::new_v4(), "Dipirona", 5.0, 1);
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo.expect_get_by_id().returning(move |_| Ok(item.clone()));
        mock_repo.expect_save().never();

        let use_case = UpdateShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(UpdateShoppingItemParams {
                id: Uuid::new_v4(),
                quantity: None,
                price: Some(-2.0),
                distributor_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingItemError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockShoppingItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateShoppingItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(UpdateShoppingItemParams {
                id: Uuid::new_v4(),
                quantity: Some(2),
                price: None,
                distributor_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingItemError::NotFound));
    }
}
