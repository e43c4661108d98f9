use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::distributor::repository::DistributorRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::import::batch::insert_in_chunks;
use crate::domain::import::columns::detect_columns;
use crate::domain::import::errors::ImportError;
use crate::domain::import::model::{DistributorSelection, ImportReport};
use crate::domain::import::reconcile::{DistributorIndex, ProductIndex, ProductMatch};
use crate::domain::import::rows::parse_rows;
use crate::domain::import::use_cases::import_prices::{
    ImportPriceListParams, ImportPriceListUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::price::model::{NewPriceProps, Price};
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::repository::ProductRepository;

pub struct ImportPriceListUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub distributor_repository: Arc<dyn DistributorRepository>,
    pub logger: Arc<dyn Logger>,
    pub batch_size: usize,
}

impl ImportPriceListUseCaseImpl {
    /// Id of the distributor for rows without a distributor column value.
    async fn selected_distributor(
        &self,
        selection: &DistributorSelection,
        index: &mut DistributorIndex,
    ) -> Result<Uuid, ImportError> {
        match selection {
            DistributorSelection::Id(id) => self
                .distributor_repository
                .get_by_id(*id)
                .await
                .map(|d| d.id)
                .map_err(|e| match e {
                    RepositoryError::NotFound => ImportError::DistributorNotFound,
                    other => ImportError::Repository(other),
                }),
            DistributorSelection::Name(name) => index
                .resolve(name)
                .map_err(|_| ImportError::DistributorNameEmpty),
        }
    }
}

#[async_trait]
impl ImportPriceListUseCase for ImportPriceListUseCaseImpl {
    async fn execute(&self, params: ImportPriceListParams) -> Result<ImportReport, ImportError> {
        let columns = detect_columns(&params.rows)?;
        let total_rows = params.rows.len().saturating_sub(1) as u64;
        self.logger.info(&format!(
            "Importing price list: {} rows, columns {:?}",
            total_rows, columns
        ));

        if let DistributorSelection::Name(name) = &params.distributor
            && name.trim().is_empty()
        {
            return Err(ImportError::DistributorNameEmpty);
        }

        let parsed = parse_rows(&params.rows, &columns);
        let mut rejected = parsed.rejected;

        let mut distributors = DistributorIndex::new(self.distributor_repository.get_all().await?);
        let mut products = ProductIndex::new(self.product_repository.get_all().await?);
        let mut selected: Option<Uuid> = None;
        let mut reused = 0u64;
        let mut prices = Vec::with_capacity(parsed.rows.len());

        for row in parsed.rows {
            let product_id = match products.resolve(
                &row.name,
                row.ean.as_deref(),
                row.manufacturer.as_deref(),
            ) {
                Ok(ProductMatch::Reused(id)) => {
                    reused += 1;
                    id
                }
                Ok(ProductMatch::Created(id)) => id,
                Err(e) => {
                    self.logger
                        .warn(&format!("Line {} rejected: {}", row.line, e));
                    rejected += 1;
                    continue;
                }
            };

            let distributor_id = match &row.distributor {
                Some(name) => match distributors.resolve(name) {
                    Ok(id) => id,
                    Err(e) => {
                        self.logger
                            .warn(&format!("Line {} rejected: {}", row.line, e));
                        rejected += 1;
                        continue;
                    }
                },
                None => match selected {
                    Some(id) => id,
                    None => {
                        let id = self
                            .selected_distributor(&params.distributor, &mut distributors)
                            .await?;
                        selected = Some(id);
                        id
                    }
                },
            };

            match Price::new(NewPriceProps {
                product_id,
                distributor_id,
                price: row.price,
                min_quantity: None,
                validity: None,
            }) {
                Ok(price) => prices.push(price),
                Err(e) => {
                    self.logger
                        .warn(&format!("Line {} rejected: {}", row.line, e));
                    rejected += 1;
                }
            }
        }

        let distributor_outcome = insert_in_chunks(
            self.distributor_repository.as_ref(),
            distributors.created(),
            self.batch_size,
            self.logger.as_ref(),
        )
        .await;
        let mut unavailable: HashSet<Uuid> = distributor_outcome
            .failed
            .iter()
            .map(|i| distributors.created()[*i].id)
            .collect();

        let mut eans_backfilled = 0u64;
        for product in products.backfilled() {
            match self.product_repository.save(product).await {
                Ok(()) => eans_backfilled += 1,
                Err(e) => self.logger.warn(&format!(
                    "Could not back-fill EAN of product {}: {}",
                    product.id, e
                )),
            }
        }

        let product_outcome = insert_in_chunks(
            self.product_repository.as_ref(),
            products.created(),
            self.batch_size,
            self.logger.as_ref(),
        )
        .await;
        unavailable.extend(
            product_outcome
                .failed
                .iter()
                .map(|i| products.created()[*i].id),
        );

        let (insertable, orphaned): (Vec<Price>, Vec<Price>) = prices.into_iter().partition(|p| {
            !unavailable.contains(&p.product_id) && !unavailable.contains(&p.distributor_id)
        });
        let price_outcome = insert_in_chunks(
            self.price_repository.as_ref(),
            &insertable,
            self.batch_size,
            self.logger.as_ref(),
        )
        .await;

        let report = ImportReport {
            total_rows,
            imported_prices: price_outcome.inserted,
            rejected_rows: rejected,
            failed_inserts: orphaned.len() as u64 + price_outcome.failed.len() as u64,
            products_created: product_outcome.inserted,
            products_reused: reused,
            distributors_created: distributor_outcome.inserted,
            eans_backfilled,
            columns,
        };

        self.logger.info(&format!(
            "Price list imported: {} prices, {} rejected, {} failed, {} new products",
            report.imported_prices, report.rejected_rows, report.failed_inserts, report.products_created
        ));
        Ok(report)
    }
}
