use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comparison::analysis::rank_offers;
use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::PriceComparison;
use crate::domain::comparison::use_cases::compare::{ComparePricesParams, ComparePricesUseCase};
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;

pub struct ComparePricesUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComparePricesUseCase for ComparePricesUseCaseImpl {
    async fn execute(
        &self,
        params: ComparePricesParams,
    ) -> Result<PriceComparison, ComparisonError> {
        self.logger
            .info(&format!("Comparing prices of product: {}", params.product_id));

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ComparisonError::ProductNotFound,
                other => ComparisonError::Repository(other),
            })?;

        let prices = self.price_repository.get_by_product(product.id).await?;
        let names: HashMap<_, _> = self
            .distributor_repository
            .get_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        let entries = rank_offers(&prices, |id| names.get(&id).cloned());
        let best = entries.first().map(|e| e.price);
        let worst = entries.last().map(|e| e.price);
        let savings = match (best, worst) {
            (Some(best), Some(worst)) if entries.len() > 1 => worst - best,
            _ => 0.0,
        };

        Ok(PriceComparison {
            product,
            entries,
            best,
            worst,
            savings,
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
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_compare_latest_offer_of_each_distributor() {
        let product_id = Uuid::new_v4();
        let cheap = Uuid::new_v4();
        let pricey = Uuid::new_v4();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Dipirona", None)));
        mock_price_repo.expect_get_by_product().returning(move |_| {
            Ok(vec![
                make_price(product_id, pricey, 30.0, Utc::now()),
                make_price(product_id, cheap, 10.0, Utc::now()),
                // Older quote, superseded by the 10.0 above.
                make_price(product_id, cheap, 5.0, Utc::now() - Duration::days(10)),
            ])
        });
        mock_distributor_repo.expect_get_all().returning(move || {
            Ok(vec![
                make_distributor(cheap, "Santa Cruz"),
                make_distributor(pricey, "Profarma"),
            ])
        });

        let use_case = ComparePricesUseCaseImpl {
            product_repository: Arc::new(mock_product_repo),
            price_repository: Arc::new(mock_price_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let comparison = use_case
            .execute(ComparePricesParams { product_id })
            .await
            .unwrap();

        assert_eq!(comparison.entries.len(), 2);
        assert_eq!(comparison.best, Some(10.0));
        assert_eq!(comparison.worst, Some(30.0));
        assert_eq!(comparison.savings, 20.0);
        assert_eq!(
            comparison.entries[0].distributor_name.as_deref(),
            Some("Santa Cruz")
        );
    }

    #[tokio::test]
    async fn should_report_zero_savings_without_offers() {
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|id| Ok(make_product(id, "Gaze", None)));
        mock_price_repo.expect_get_by_product().returning(|_| Ok(vec![]));
        mock_distributor_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = ComparePricesUseCaseImpl {
            product_repository: Arc::new(mock_product_repo),
            price_repository: Arc::new(mock_price_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let comparison = use_case
            .execute(ComparePricesParams {
                product_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(comparison.entries.is_empty());
        assert_eq!(comparison.best, None);
        assert_eq!(comparison.savings, 0.0);
    }

    #[tokio::test]
    async fn should_return_product_not_found() {
        let mut mock_product_repo = MockProductRepo::new();
        mock_product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = ComparePricesUseCaseImpl {
            product_repository: Arc::new(mock_product_repo),
            price_repository: Arc::new(MockPriceRepo::new()),
            distributor_repository: Arc::new(MockDistributorRepo::new()),
            logger: arc_logger(),
        };

        let result = use_case
            .execute(ComparePricesParams {
                product_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ComparisonError::ProductNotFound));
    }
}
