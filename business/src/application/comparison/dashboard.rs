use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::comparison::analysis::{RECENT_PRICES_LIMIT, potential_savings};
use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::DashboardStats;
use crate::domain::comparison::use_cases::dashboard::DashboardUseCase;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::logger::Logger;
use crate::domain::price::model::join_prices;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;

pub struct DashboardUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DashboardUseCase for DashboardUseCaseImpl {
    async fn execute(&self) -> Result<DashboardStats, ComparisonError> {
        self.logger.debug("Computing dashboard");

        let distributors = self.distributor_repository.get_all().await?;
        let products = self.product_repository.get_all().await?;
        // Most recent first.
        let prices = self.price_repository.get_all().await?;

        let savings = potential_savings(&prices);
        let price_count = prices.len() as u64;
        let recent: Vec<_> = prices.into_iter().take(RECENT_PRICES_LIMIT).collect();

        Ok(DashboardStats {
            distributors: distributors.len() as u64,
            products: products.len() as u64,
            prices: price_count,
            potential_savings: savings,
            recent_prices: join_prices(recent, &products, &distributors),
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
    async fn should_count_records_and_sum_potential_savings() {
        let product = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut mock_product_repo = MockProductRepo::new();
        let mut mock_price_repo = MockPriceRepo::new();
        let mut mock_distributor_repo = MockDistributorRepo::new();
        mock_distributor_repo
            .expect_get_all()
            .returning(move || Ok(vec![make_distributor(a, "A"), make_distributor(b, "B")]));
        mock_product_repo
            .expect_get_all()
            .returning(move || Ok(vec![make_product(product, "Dipirona", None)]));
        mock_price_repo.expect_get_all().returning(move || {
            Ok((0..7)
                .map(|i| {
                    let distributor = if i % 2 == 0 { a } else { b };
                    make_price(
                        product,
                        distributor,
                        10.0 + f64::from(i),
                        Utc::now() - Duration::hours(i64::from(i)),
                    )
                })
                .collect())
        });

        let use_case = DashboardUseCaseImpl {
            product_repository: Arc::new(mock_product_repo),
            price_repository: Arc::new(mock_price_repo),
            distributor_repository: Arc::new(mock_distributor_repo),
            logger: arc_logger(),
        };

        let stats = use_case.execute().await.unwrap();

        assert_eq!(stats.distributors, 2);
        assert_eq!(stats.products, 1);
        assert_eq!(stats.prices, 7);
        assert_eq!(stats.potential_savings, 6.0);
        assert_eq!(stats.recent_prices.len(), 5);
        assert_eq!(stats.recent_prices[0].product_name.as_deref(), Some("Dipirona"));
    }
}
