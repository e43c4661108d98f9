use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{PriceView, join_prices};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::get_by_product::{
    GetPricesByProductParams, GetPricesByProductUseCase,
};
use crate::domain::product::repository::ProductRepository;

pub struct GetPricesByProductUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPricesByProductUseCase for GetPricesByProductUseCaseImpl {
    async fn execute(
        &self,
        params: GetPricesByProductParams,
    ) -> Result<Vec<PriceView>, PriceError> {
        self.logger
            .debug(&format!("Listing prices of product: {}", params.product_id));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::ProductNotFound,
                other => PriceError::Repository(other),
            })?;

        let prices = self.repository.get_by_product(product.id).await?;
        let distributors = self.distributor_repository.get_all().await?;

        Ok(join_prices(prices, &[product], &distributors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDistributorRepo, MockPriceRepo, MockProductRepo, arc_logger, make_distributor,
        make_price, make_product,
    };
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_list_prices_of_product_most_recent_first() {
        let product_id = Uuid::new_v4();
        let distributor_id = Uuid::new_v4();
        let mut mock_repo = MockPriceRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Dipirona", None)));
        mock_repo
            .expect_get_by_product()
            .withf(move |p| *p == product_id)
            .returning(move |_| {
                Ok(vec![
                    make_price(product_id, distributor_id, 9.0, Utc::now()),
                    make_price(product_id, distributor_id, 8.0, Utc::now() - Duration::days(1)),
                ])
            });
        mock_distributor_repo
            .expect_get_all()
            .returning(move || Ok(vec![make_distributor(distributor_id, "Santa Cruz")]));

        let use_case = GetPricesByProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let views = use_case
            .execute(GetPricesByProductParams { product_id })
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].price.price, 9.0);
        assert_eq!(views[1].distributor_name.as_deref(), Some("Santa Cruz"));
    }

    #[tokio::test]
    async fn should_return_product_not_found() {
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetPricesByProductUseCaseImpl {
            repository: Arc::new(MockPriceRepo::new()),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(GetPricesByProductParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), PriceError::ProductNotFound));
    }
}
