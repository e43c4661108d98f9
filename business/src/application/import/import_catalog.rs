use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::import::batch::insert_in_chunks;
use crate::domain::import::columns::detect_columns;
use crate::domain::import::errors::ImportError;
use crate::domain::import::model::CatalogReport;
use crate::domain::import::reconcile::ProductIndex;
use crate::domain::import::rows::{optional_text, row_ean, row_name};
use crate::domain::import::use_cases::import_catalog::{
    ImportCatalogParams, ImportCatalogUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct ImportCatalogUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub batch_size: usize,
}

#[async_trait]
impl ImportCatalogUseCase for ImportCatalogUseCaseImpl {
    async fn execute(&self, params: ImportCatalogParams) -> Result<CatalogReport, ImportError> {
        let columns = detect_columns(&params.rows)?;
        let total_rows = params.rows.len().saturating_sub(1) as u64;
        self.logger
            .info(&format!("Importing catalog: {} rows", total_rows));

        let mut index = ProductIndex::new(self.product_repository.get_all().await?);
        let mut skipped = 0u64;
        let mut invalid = 0u64;

        for row in params.rows.iter().skip(1) {
            let Ok(name) = row_name(row, &columns) else {
                invalid += 1;
                continue;
            };
            let ean = row_ean(row, &columns);

            if index.find(&name, ean.as_deref()).is_some() {
                skipped += 1;
                continue;
            }

            let manufacturer = optional_text(row, columns.manufacturer);
            if index
                .resolve(&name, ean.as_deref(), manufacturer.as_deref())
                .is_err()
            {
                invalid += 1;
            }
        }

        let outcome = insert_in_chunks(
            self.product_repository.as_ref(),
            index.created(),
            self.batch_size,
            self.logger.as_ref(),
        )
        .await;

        let report = CatalogReport {
            total_rows,
            inserted: outcome.inserted,
            skipped,
            invalid,
            failed: outcome.failed.len() as u64,
            columns,
        };

        self.logger.info(&format!(
            "Catalog imported: {} inserted, {} skipped, {} invalid, {} failed",
            report.inserted, report.skipped, report.invalid, report.failed
        ));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::model::Cell;
    use crate::test_utils::{MockProductRepo, arc_logger, make_product};
    use uuid::Uuid;

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    #[tokio::test]
    async fn should_insert_only_unknown_products_in_batches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![make_product(Uuid::new_v4(), "Dipirona", Some("7891"))])
        });
        mock_repo
            .expect_save_batch()
            .withf(|batch| batch.len() == 2)
            .times(1)
            .returning(|_| Ok(()));
        mock_repo
            .expect_save_batch()
            .withf(|batch| batch.len() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ImportCatalogUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: arc_logger(),
            batch_size: 2,
        };

        let report = use_case
            .execute(ImportCatalogParams {
                rows: vec![
                    row(&["Nome", "EAN"]),
                    row(&["Outro nome", "7891"]),
                    row(&["DIPIRONA", ""]),
                    row(&["Gaze", "111"]),
                    row(&["gaze ", ""]),
                    row(&["Soro", "222"]),
                    row(&["Luva", ""]),
                    row(&["", "333"]),
                ],
            })
            .await
            .unwrap();

        assert_eq!(report.total_rows, 7);
        assert_eq!(report.inserted, 3);
        assert_eq!(report.skipped, 3);
        assert_eq!(report.invalid, 1);
        assert_eq!(report.failed, 0);
    }

    #[tokio::test]
    async fn should_report_rows_that_fail_individually() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));
        mock_repo
            .expect_save_batch()
            .returning(|_| Err(crate::domain::errors::RepositoryError::DatabaseError));
        mock_repo.expect_save().returning(|p| {
            if p.name == "Luva" {
                Err(crate::domain::errors::RepositoryError::Duplicated)
            } else {
                Ok(())
            }
        });

        let use_case = ImportCatalogUseCaseImpl {
            product_repository: Arc::new(mock_repo),
            logger: arc_logger(),
            batch_size: 100,
        };

        let report = use_case
            .execute(ImportCatalogParams {
                rows: vec![row(&["Nome"]), row(&["Luva"]), row(&["Soro"])],
            })
            .await
            .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.failed, 1);
    }
}
