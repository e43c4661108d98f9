use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{PriceView, join_prices};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::get_all::{GetAllPricesParams, GetAllPricesUseCase};
use crate::domain::product::repository::ProductRepository;

pub struct GetAllPricesUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPricesUseCase for GetAllPricesUseCaseImpl {
    async fn execute(&self, params: GetAllPricesParams) -> Result<Vec<PriceView>, PriceError> {
        self.logger.debug("Listing prices");

        let prices = self.repository.get_all().await?;
        let products = self.product_repository.get_all().await?;
        let distributors = self.distributor_repository.get_all().await?;

        let views = join_prices(prices, &products, &distributors);
        Ok(match params.search.as_deref() {
            Some(term) => views.into_iter().filter(|v| v.matches(term)).collect(),
            None => views,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDistributorRepo, MockPriceRepo, MockProductRepo, arc_logger, make_distributor,
        make_price, make_product,
    };
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_join_names_and_filter_by_distributor_name() {
        let dipirona = Uuid::new_v4();
        let santa_cruz = Uuid::new_v4();
        let profarma = Uuid::new_v4();
        let mut mock_repo = MockPriceRepo::new();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                make_price(dipirona, santa_cruz, 10.0, Utc::now()),
                make_price(dipirona, profarma, 12.0, Utc::now()),
            ])
        });
        mock_product_repo
            .expect_get_all()
            .returning(move || Ok(vec![make_product(dipirona, "Dipirona", None)]));
        mock_distributor_repo.expect_get_all().returning(move || {
            Ok(vec![
                make_distributor(santa_cruz, "Santa Cruz"),
                make_distributor(profarma, "Profarma"),
            ])
        });

        let use_case = GetAllPricesUseCaseImpl {
            repository: Arc::new(mock_repo),
            product_repository: Arc::new(mock_product_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let views = use_case
            .execute(GetAllPricesParams {
                search: Some("profarma".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].product_name.as_deref(), Some("Dipirona"));
        assert_eq!(views[0].price.price, 12.0);
    }
}
