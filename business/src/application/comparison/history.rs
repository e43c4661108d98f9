use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comparison::analysis::{history_points, variation};
use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::PriceHistory;
use crate::domain::comparison::use_cases::history::{PriceHistoryParams, PriceHistoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;

pub struct PriceHistoryUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PriceHistoryUseCase for PriceHistoryUseCaseImpl {
    async fn execute(&self, params: PriceHistoryParams) -> Result<PriceHistory, ComparisonError> {
        self.logger.debug(&format!(
            "Loading price history of product {} (distributor {:?})",
            params.product_id, params.distributor_id
        ));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ComparisonError::ProductNotFound,
                other => ComparisonError::Repository(other),
            })?;

        let prices = self
            .price_repository
            .get_history(product.id, params.distributor_id)
            .await?;
        let points = history_points(&prices);
        let variation = variation(&points);

        Ok(PriceHistory {
            product,
            distributor_id: params.distributor_id,
            points,
            variation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockPriceRepo, MockProductRepo, arc_logger, make_price, make_product};
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_build_history_for_one_distributor() {
        let product_id = Uuid::new_v4();
        let distributor_id = Uuid::new_v4();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Dipirona", None)));
        mock_price_repo
            .expect_get_history()
            .withf(move |p, d| *p == product_id && *d == Some(distributor_id))
            .returning(move |_, _| {
                Ok(vec![
                    make_price(product_id, distributor_id, 10.0, Utc::now() - Duration::days(2)),
                    make_price(product_id, distributor_id, 15.0, Utc::now()),
                ])
            });

        let use_case = PriceHistoryUseCaseImpl {
            product_repository: Arc::new(mock_product_repo),
            price_repository: Arc::new(mock_price_repo),
            logger: arc_logger(),
        };

        let history = use_case
            .execute(PriceHistoryParams {
                product_id,
                distributor_id: Some(distributor_id),
            })
            .await
            .unwrap();

        assert_eq!(history.points.len(), 2);
        assert_eq!(history.points[1].change, Some(5.0));
        let variation = history.variation.unwrap();
        assert_eq!(variation.percent, 50.0);
        assert!(variation.is_up);
    }
}
