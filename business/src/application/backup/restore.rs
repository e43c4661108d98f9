use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::backup::clear_all::ClearAllDataUseCaseImpl;
use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::TableCounts;
use crate::domain::backup::use_cases::restore::{RestoreDataParams, RestoreDataUseCase};
use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::import::batch::insert_in_chunks;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::text::normalize_ean;
use crate::domain::shopping_item::repository::ShoppingItemRepository;

pub struct RestoreDataUseCaseImpl {
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub shopping_item_repository: Arc<dyn ShoppingItemRepository>,
    pub logger: Arc<dyn Logger>,
    pub batch_size: usize,
}

#[async_trait]
impl RestoreDataUseCase for RestoreDataUseCaseImpl {
    async fn execute(&self, params: RestoreDataParams) -> Result<TableCounts, BackupError> {
        let snapshot = params.snapshot;
        if !snapshot.is_supported() {
            return Err(BackupError::UnsupportedVersion);
        }
        self.logger.warn(&format!(
            "Restoring snapshot exported at {} (version {})",
            snapshot.exported_at, snapshot.version
        ));

        let cleared = ClearAllDataUseCaseImpl {
            distributor_repository: self.distributor_repository.clone(),
            product_repository: self.product_repository.clone(),
            price_repository: self.price_repository.clone(),
            shopping_item_repository: self.shopping_item_repository.clone(),
            logger: self.logger.clone(),
        }
        .clear_tables()
        .await?;
        self.logger
            .info(&format!("Existing data cleared: {:?}", cleared));

        let logger = self.logger.as_ref();
        let valid_distributors = retain_valid(snapshot.distributors, "distributors", logger, |d| {
            !d.name.trim().is_empty()
        });
        let valid_products: Vec<_> = retain_valid(snapshot.products, "products", logger, |p| {
            !p.name.trim().is_empty()
        })
        .into_iter()
        .map(|mut p| {
            p.ean = normalize_ean(p.ean.as_deref());
            p
        })
        .collect();
        let product_ids: HashSet<_> = valid_products.iter().map(|p| p.id).collect();
        let distributor_ids: HashSet<_> = valid_distributors.iter().map(|d| d.id).collect();
        let valid_prices = retain_valid(snapshot.prices, "prices", logger, |p| {
            p.price.is_finite()
                && p.price > 0.0
                && p.min_quantity >= 1
                && product_ids.contains(&p.product_id)
                && distributor_ids.contains(&p.distributor_id)
        });
        let valid_items = retain_valid(snapshot.shopping_list, "shopping_list", logger, |i| {
            !i.product_name.trim().is_empty()
                && i.quantity >= 1
                && i.price.is_finite()
                && i.price >= 0.0
        });

        let distributors = insert_in_chunks(
            self.distributor_repository.as_ref(),
            &valid_distributors,
            self.batch_size,
            logger,
        )
        .await;
        let products = insert_in_chunks(
            self.product_repository.as_ref(),
            &valid_products,
            self.batch_size,
            logger,
        )
        .await;
        let prices = insert_in_chunks(
            self.price_repository.as_ref(),
            &valid_prices,
            self.batch_size,
            logger,
        )
        .await;
        let shopping_list = insert_in_chunks(
            self.shopping_item_repository.as_ref(),
            &valid_items,
            self.batch_size,
            logger,
        )
        .await;

        let restored = TableCounts {
            distributors: distributors.inserted,
            products: products.inserted,
            prices: prices.inserted,
            shopping_list: shopping_list.inserted,
        };
        self.logger
            .info(&format!("Snapshot restored: {:?}", restored));
        Ok(restored)
    }
}

/// Keeps the rows passing `is_valid`, logging how many were skipped.
fn retain_valid<T>(
    rows: Vec<T>,
    table: &str,
    logger: &dyn Logger,
    is_valid: impl Fn(&T) -> bool,
) -> Vec<T> {
    let total = rows.len();
    let kept: Vec<T> = rows.into_iter().filter(|row| is_valid(row)).collect();
    if kept.len() < total {
        logger.warn(&format!(
            "Skipping {} invalid {table} rows from snapshot",
            total - kept.len()
        ));
    }
    kept
}
