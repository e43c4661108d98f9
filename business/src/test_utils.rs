//! Mocks of the storage and logging ports plus small fixtures for use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::distributor::model::Distributor;
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::model::Price;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{ProductCategory, ProductUnit};
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::repository::ShoppingItemRepository;

mock! {
    pub DistributorRepo {}

    #[async_trait]
    impl DistributorRepository for DistributorRepo {
        async fn get_all(&self) -> Result<Vec<Distributor>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Distributor, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Distributor>, RepositoryError>;
        async fn save(&self, distributor: &Distributor) -> Result<(), RepositoryError>;
        async fn save_batch(&self, distributors: &[Distributor]) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_all(&self) -> Result<u64, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
        async fn find_by_ean(&self, ean: &str) -> Result<Option<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn save_batch(&self, products: &[Product]) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_all(&self) -> Result<u64, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub PriceRepo {}

    #[async_trait]
    impl PriceRepository for PriceRepo {
        async fn get_all(&self) -> Result<Vec<Price>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError>;
        async fn get_by_product(&self, product_id: Uuid) -> Result<Vec<Price>, RepositoryError>;
        async fn get_history(&self, product_id: Uuid, distributor_id: Option<Uuid>) -> Result<Vec<Price>, RepositoryError>;
        async fn save(&self, price: &Price) -> Result<(), RepositoryError>;
        async fn save_batch(&self, prices: &[Price]) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_by_product(&self, product_id: Uuid) -> Result<u64, RepositoryError>;
        async fn delete_by_distributor(&self, distributor_id: Uuid) -> Result<u64, RepositoryError>;
        async fn delete_all(&self) -> Result<u64, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub ShoppingItemRepo {}

    #[async_trait]
    impl ShoppingItemRepository for ShoppingItemRepo {
        async fn get_all(&self) -> Result<Vec<ShoppingItem>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<ShoppingItem, RepositoryError>;
        async fn find_by_product_id(&self, product_id: Uuid) -> Result<Option<ShoppingItem>, RepositoryError>;
        async fn save(&self, item: &ShoppingItem) -> Result<(), RepositoryError>;
        async fn save_batch(&self, items: &[ShoppingItem]) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        async fn delete_all(&self) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> MockLog {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    logger
}

pub fn arc_logger() -> Arc<dyn Logger> {
    Arc::new(mock_logger())
}

pub fn make_distributor(id: Uuid, name: &str) -> Distributor {
    Distributor::from_repository(id, name.to_string(), None, None, None, Utc::now())
}

pub fn make_product(id: Uuid, name: &str, ean: Option<&str>) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        ean.map(str::to_string),
        None,
        ProductCategory::Generico,
        ProductUnit::Cx,
        Utc::now(),
    )
}

pub fn make_price(
    product_id: Uuid,
    distributor_id: Uuid,
    price: f64,
    recorded_at: DateTime<Utc>,
) -> Price {
    Price::from_repository(
        Uuid::new_v4(),
        product_id,
        distributor_id,
        price,
        1,
        None,
        recorded_at,
    )
}

pub fn make_item(product_id: Uuid, name: &str, price: f64, quantity: u32) -> ShoppingItem {
    let now = Utc::now();
    ShoppingItem::from_repository(
        Uuid::new_v4(),
        product_id,
        name.to_string(),
        None,
        None,
        None,
        price,
        quantity,
        None,
        None,
        now,
        now,
    )
}
