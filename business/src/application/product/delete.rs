use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<u64, ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let removed_prices = self.price_repository.delete_by_product(params.id).await?;
        self.repository.delete(params.id).await?;

        self.logger.info(&format!(
            "Product deleted: {} ({} prices removed)",
            params.id, removed_prices
        ));
        Ok(removed_prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockPriceRepo, MockProductRepo, arc_logger, make_product};
    use mockall::Sequence;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_prices_before_product() {
        let id = Uuid::new_v4();
        let mut seq = Sequence::new();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", None)));
        mock_price_repo
            .expect_delete_by_product()
            .withf(move |p| *p == id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(2));
        mock_repo
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(mock_price_repo),
            logger: arc_logger(),
        };

        let removed = use_case.execute(DeleteProductParams { id }).await.unwrap();

        assert_eq!(removed, 2);
    }

    #[tokio::test]
    async fn should_keep_product_when_price_cascade_fails() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(make_product(id, "Dipirona", None)));
        mock_price_repo
            .expect_delete_by_product()
            .returning(|_| Err(RepositoryError::DatabaseError));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(mock_price_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id }).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
