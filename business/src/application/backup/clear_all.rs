use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::TableCounts;
use crate::domain::backup::use_cases::clear_all::ClearAllDataUseCase;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_item::repository::ShoppingItemRepository;

pub struct ClearAllDataUseCaseImpl {
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub shopping_item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ClearAllDataUseCaseImpl {
    /// Empties every table, dependants first.
    pub(crate) async fn clear_tables(&self) -> Result<TableCounts, RepositoryError> {
        let prices = self.price_repository.delete_all().await?;
        let products = self.product_repository.delete_all().await?;
        let distributors = self.distributor_repository.delete_all().await?;
        let shopping_list = self.shopping_item_repository.delete_all().await?;

        Ok(TableCounts {
            distributors,
            products,
            prices,
            shopping_list,
        })
    }
}

#[async_trait]
impl ClearAllDataUseCase for ClearAllDataUseCaseImpl {
    async fn execute(&self) -> Result<TableCounts, BackupError> {
        self.logger.warn("Clearing all data");

        let counts = self.clear_tables().await?;

        self.logger.info(&format!("All data cleared: {:?}", counts));
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockDistributorRepo, MockPriceRepo, MockProductRepo, MockShoppingItemRepo, arc_logger,
    };
    use mockall::Sequence;

    #[tokio::test]
    async fn should_clear_prices_before_products_and_distributors() {
        let mut seq = Sequence::new();
        let mut distributors = MockDistributorRepo::new();
        let mut products = MockProductRepo::new();
        let mut prices = MockPriceRepo::new();
        let mut items = MockShoppingItemRepo::new();
        prices
            .expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(10));
        products
            .expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(4));
        distributors
            .expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(2));
        items
            .expect_delete_all()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(1));

        let use_case = ClearAllDataUseCaseImpl {
            distributor_repository: Arc::new(distributors),
            product_repository: Arc::new(products),
            price_repository: Arc::new(prices),
            shopping_item_repository: Arc::new(items),
            logger: arc_logger(),
        };

        let counts = use_case.execute().await.unwrap();

        assert_eq!(
            counts,
            TableCounts {
                distributors: 2,
                products: 4,
                prices: 10,
                shopping_list: 1,
            }
        );
    }
}
