use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::delete::{DeletePriceParams, DeletePriceUseCase};

pub struct DeletePriceUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeletePriceUseCase for DeletePriceUseCaseImpl {
    async fn execute(&self, params: DeletePriceParams) -> Result<(), PriceError> {
        self.logger.info(&format!("Deleting price: {}", params.id));

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::NotFound,
                other => PriceError::Repository(other),
            })?;

        self.logger.info(&format!("Price deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockPriceRepo, arc_logger};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_delete_price() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockPriceRepo::new();
        mock_repo
            .expect_delete()
            .withf(move |p| *p == id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeletePriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        assert!(use_case.execute(DeletePriceParams { id }).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockPriceRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeletePriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(DeletePriceParams { id: Uuid::new_v4() }).await;

        assert!(matches!(result.unwrap_err(), PriceError::NotFound));
    }
}
