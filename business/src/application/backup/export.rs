use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::Snapshot;
use crate::domain::backup::use_cases::export::ExportDataUseCase;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shopping_item::repository::ShoppingItemRepository;

pub struct ExportDataUseCaseImpl {
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub shopping_item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportDataUseCase for ExportDataUseCaseImpl {
    async fn execute(&self) -> Result<Snapshot, BackupError> {
        self.logger.info("Exporting full snapshot");

        let snapshot = Snapshot::new(
            self.distributor_repository.get_all().await?,
            self.product_repository.get_all().await?,
            self.price_repository.get_all().await?,
            self.shopping_item_repository.get_all().await?,
        );

        self.logger.info(&format!(
            "Snapshot exported: {} distributors, {} products, {} prices, {} shopping items",
            snapshot.distributors.len(),
            snapshot.products.len(),
            snapshot.prices.len(),
            snapshot.shopping_list.len()
        ));
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::backup::model::SNAPSHOT_VERSION;
    use crate::test_utils::{
        MockDistributorRepo, MockPriceRepo, MockProductRepo, MockShoppingItemRepo, arc_logger,
        make_distributor, make_item, make_price, make_product,
    };
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_collect_every_table() {
        let product = Uuid::new_v4();
        let distributor = Uuid::new_v4();
        let mut distributors = MockDistributorRepo::new();
        let mut products = MockProductRepo::new();
        let mut prices = MockPriceRepo::new();
        let mut items = MockShoppingItemRepo::new();
        distributors
            .expect_get_all()
            .returning(move || Ok(vec![make_distributor(distributor, "Santa Cruz")]));
        products
            .expect_get_all()
            .returning(move || Ok(vec![make_product(product, "Dipirona", None)]));
        prices
            .expect_get_all()
            .returning(move || Ok(vec![make_price(product, distributor, 3.0, Utc::now())]));
        items
            .expect_get_all()
            .returning(move || Ok(vec![make_item(product, "Dipirona", 3.0, 2)]));

        let use_case = ExportDataUseCaseImpl {
            distributor_repository: Arc::new(distributors),
            product_repository: Arc::new(products),
            price_repository: Arc::new(prices),
            shopping_item_repository: Arc::new(items),
            logger: arc_logger(),
        };

        let snapshot = use_case.execute().await.unwrap();

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.distributors.len(), 1);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.prices.len(), 1);
        assert_eq!(snapshot.shopping_list.len(), 1);
    }
}
