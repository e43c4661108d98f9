use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{NewPriceProps, Price};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::create::{CreatePriceParams, CreatePriceUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct CreatePriceUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePriceUseCase for CreatePriceUseCaseImpl {
    async fn execute(&self, params: CreatePriceParams) -> Result<Price, PriceError> {
        self.logger.info(&format!(
            "Recording price {} for product {} at distributor {}",
            params.price, params.product_id, params.distributor_id
        ));

        let price = Price::new(NewPriceProps {
            product_id: params.product_id,
            distributor_id: params.distributor_id,
            price: params.price,
            min_quantity: params.min_quantity,
            validity: params.validity,
        })?;

        self.product_repository
            .get_by_id(price.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::ProductNotFound,
                other => PriceError::Repository(other),
            })?;
        self.distributor_repository
            .get_by_id(price.distributor_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::DistributorNotFound,
                other => PriceError::Repository(other),
            })?;

        self.repository.save(&price).await?;

        self.logger.info(&format!("Price recorded: {}", price.id));
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDistributorRepo, MockPriceRepo, MockProductRepo, arc_logger, make_distributor,
        make_product,
    };
    use uuid::Uuid;

    fn params(price: f64) -> CreatePriceParams {
        CreatePriceParams {
            product_id: Uuid::new_v4(),
            distributor_id: Uuid::new_v4(),
            price,
            min_quantity: Some(10),
            validity: None,
        }
    }

    #[tokio::test]
    async fn should_record_price_when_references_exist() {
        let mut mock_repo = MockPriceRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Dipirona", None)));
        mock_distributor_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_distributor(id, "Santa Cruz")));
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreatePriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let price = use_case.execute(params(18.9)).await.unwrap();

        assert_eq!(price.price, 18.9);
        assert_eq!(price.min_quantity, 10);
    }

    #[tokio::test]
    async fn should_reject_non_positive_price_before_lookups() {
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo.expect_get_by_id().never();

        let use_case = CreatePriceUseCaseImpl {
            repository: Arc::new(MockPriceRepo::new()),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case.execute(params(0.0)).await;

        assert!(matches!(result.unwrap_err(), PriceError::InvalidValue));
    }

    #[tokio::test]
    async fn should_reject_unknown_distributor() {
        let mut mock_repo = MockPriceRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Dipirona", None)));
        mock_distributor_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = CreatePriceUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let result = use_case.execute(params(5.0)).await;

        assert!(matches!(result.unwrap_err(), PriceError::DistributorNotFound));
    }
}
