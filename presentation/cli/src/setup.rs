use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use logger::TracingLogger;
use persistence::backend::{Repositories, StorageConfig};

use business::application::backup::clear_all::ClearAllDataUseCaseImpl;
use business::application::backup::export::ExportDataUseCaseImpl;
use business::application::backup::restore::RestoreDataUseCaseImpl;
use business::application::comparison::dashboard::DashboardUseCaseImpl;
use business::application::import::import_catalog::ImportCatalogUseCaseImpl;
use business::application::import::import_prices::ImportPriceListUseCaseImpl;
use business::application::price::get_all::GetAllPricesUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::shopping_item::get_all::GetShoppingListUseCaseImpl;
use business::domain::backup::use_cases::clear_all::ClearAllDataUseCase;
use business::domain::backup::use_cases::export::ExportDataUseCase;
use business::domain::backup::use_cases::restore::RestoreDataUseCase;
use business::domain::comparison::use_cases::dashboard::DashboardUseCase;
use business::domain::import::use_cases::import_catalog::ImportCatalogUseCase;
use business::domain::import::use_cases::import_prices::ImportPriceListUseCase;
use business::domain::price::use_cases::get_all::GetAllPricesUseCase;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::shopping_item::use_cases::get_all::GetShoppingListUseCase;

/// Backend for this run. Without `--local-store`, `DATABASE_URL` is required.
pub fn storage_config(local_store: Option<PathBuf>) -> anyhow::Result<StorageConfig> {
    match local_store {
        Some(path) => Ok(StorageConfig::local(path)),
        None => StorageConfig::postgres_from_env()
            .context("DATABASE_URL is not set; pass --local-store <dir> to use a local store"),
    }
}

/// Use cases reachable from the command line.
pub struct Services {
    pub import_prices: Arc<dyn ImportPriceListUseCase>,
    pub import_catalog: Arc<dyn ImportCatalogUseCase>,
    pub dashboard: Arc<dyn DashboardUseCase>,
    pub products: Arc<dyn GetAllProductsUseCase>,
    pub prices: Arc<dyn GetAllPricesUseCase>,
    pub shopping_list: Arc<dyn GetShoppingListUseCase>,
    pub export: Arc<dyn ExportDataUseCase>,
    pub restore: Arc<dyn RestoreDataUseCase>,
    pub clear_all: Arc<dyn ClearAllDataUseCase>,
}

impl Services {
    pub fn new(repositories: Repositories, batch_size: usize) -> Self {
        let logger = Arc::new(TracingLogger);
        let Repositories {
            distributors,
            products,
            prices,
            shopping_items,
        } = repositories;

        Self {
            import_prices: Arc::new(ImportPriceListUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
                batch_size,
            }),
            import_catalog: Arc::new(ImportCatalogUseCaseImpl {
                product_repository: products.clone(),
                logger: logger.clone(),
                batch_size,
            }),
            dashboard: Arc::new(DashboardUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            products: Arc::new(GetAllProductsUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            prices: Arc::new(GetAllPricesUseCaseImpl {
                repository: prices.clone(),
                product_repository: products.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            shopping_list: Arc::new(GetShoppingListUseCaseImpl {
                repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            export: Arc::new(ExportDataUseCaseImpl {
                distributor_repository: distributors.clone(),
                product_repository: products.clone(),
                price_repository: prices.clone(),
                shopping_item_repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            restore: Arc::new(RestoreDataUseCaseImpl {
                distributor_repository: distributors.clone(),
                product_repository: products.clone(),
                price_repository: prices.clone(),
                shopping_item_repository: shopping_items.clone(),
                logger: logger.clone(),
                batch_size,
            }),
            clear_all: Arc::new(ClearAllDataUseCaseImpl {
                distributor_repository: distributors,
                product_repository: products,
                price_repository: prices,
                shopping_item_repository: shopping_items,
                logger,
            }),
        }
    }
}
