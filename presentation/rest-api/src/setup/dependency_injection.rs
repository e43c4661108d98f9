use std::sync::Arc;

use logger::TracingLogger;
use persistence::backend::{Repositories, StorageConfig};

use business::application::backup::clear_all::ClearAllDataUseCaseImpl;
use business::application::backup::export::ExportDataUseCaseImpl;
use business::application::backup::restore::RestoreDataUseCaseImpl;
use business::application::comparison::compare::ComparePricesUseCaseImpl;
use business::application::comparison::dashboard::DashboardUseCaseImpl;
use business::application::comparison::history::PriceHistoryUseCaseImpl;
use business::application::distributor::create::CreateDistributorUseCaseImpl;
use business::application::distributor::delete::DeleteDistributorUseCaseImpl;
use business::application::distributor::get_all::GetAllDistributorsUseCaseImpl;
use business::application::distributor::get_by_id::GetDistributorByIdUseCaseImpl;
use business::application::distributor::update::UpdateDistributorUseCaseImpl;
use business::application::import::import_catalog::ImportCatalogUseCaseImpl;
use business::application::import::import_prices::ImportPriceListUseCaseImpl;
use business::application::price::create::CreatePriceUseCaseImpl;
use business::application::price::delete::DeletePriceUseCaseImpl;
use business::application::price::get_all::GetAllPricesUseCaseImpl;
use business::application::price::get_by_product::GetPricesByProductUseCaseImpl;
use business::application::price::update::UpdatePriceUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::shopping_item::add_product::AddProductToListUseCaseImpl;
use business::application::shopping_item::clear::ClearShoppingListUseCaseImpl;
use business::application::shopping_item::delete::DeleteShoppingItemUseCaseImpl;
use business::application::shopping_item::get_all::GetShoppingListUseCaseImpl;
use business::application::shopping_item::save_prices::SaveListPricesUseCaseImpl;
use business::application::shopping_item::update::UpdateShoppingItemUseCaseImpl;

use crate::api::backup::routes::BackupApi;
use crate::api::comparison::routes::ComparisonApi;
use crate::api::distributor::routes::DistributorApi;
use crate::api::import::routes::ImportApi;
use crate::api::price::routes::PriceApi;
use crate::api::product::routes::ProductApi;
use crate::api::shopping_item::routes::ShoppingItemApi;
use crate::config::import_config::ImportConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub distributor_api: DistributorApi,
    pub product_api: ProductApi,
    pub price_api: PriceApi,
    pub comparison_api: ComparisonApi,
    pub shopping_item_api: ShoppingItemApi,
    pub import_api: ImportApi,
    pub backup_api: BackupApi,
}

impl DependencyContainer {
    pub fn new(repositories: Repositories, storage: &StorageConfig, import: &ImportConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(match storage {
            StorageConfig::Postgres { .. } => "postgres",
            StorageConfig::Local { .. } => "local",
        });

        let Repositories {
            distributors,
            products,
            prices,
            shopping_items,
        } = repositories;

        // Distributor use cases
        let distributor_api = DistributorApi::new(
            Arc::new(CreateDistributorUseCaseImpl {
                repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllDistributorsUseCaseImpl {
                repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetDistributorByIdUseCaseImpl {
                repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateDistributorUseCaseImpl {
                repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteDistributorUseCaseImpl {
                repository: distributors.clone(),
                price_repository: prices.clone(),
                logger: logger.clone(),
            }),
        );

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: products.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: products.clone(),
                price_repository: prices.clone(),
                logger: logger.clone(),
            }),
        );

        // Price use cases
        let price_api = PriceApi::new(
            Arc::new(CreatePriceUseCaseImpl {
                repository: prices.clone(),
                product_repository: products.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllPricesUseCaseImpl {
                repository: prices.clone(),
                product_repository: products.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetPricesByProductUseCaseImpl {
                repository: prices.clone(),
                product_repository: products.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdatePriceUseCaseImpl {
                repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeletePriceUseCaseImpl {
                repository: prices.clone(),
                logger: logger.clone(),
            }),
        );

        // Comparison use cases
        let comparison_api = ComparisonApi::new(
            Arc::new(ComparePricesUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(PriceHistoryUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DashboardUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
        );

        // Shopping list use cases
        let shopping_item_api = ShoppingItemApi::new(
            Arc::new(GetShoppingListUseCaseImpl {
                repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddProductToListUseCaseImpl {
                repository: shopping_items.clone(),
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateShoppingItemUseCaseImpl {
                repository: shopping_items.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteShoppingItemUseCaseImpl {
                repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearShoppingListUseCaseImpl {
                repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SaveListPricesUseCaseImpl {
                repository: shopping_items.clone(),
                price_repository: prices.clone(),
                logger: logger.clone(),
            }),
        );

        // Import use cases
        let import_api = ImportApi::new(
            Arc::new(ImportPriceListUseCaseImpl {
                product_repository: products.clone(),
                price_repository: prices.clone(),
                distributor_repository: distributors.clone(),
                logger: logger.clone(),
                batch_size: import.batch_size,
            }),
            Arc::new(ImportCatalogUseCaseImpl {
                product_repository: products.clone(),
                logger: logger.clone(),
                batch_size: import.batch_size,
            }),
        );

        // Backup use cases
        let backup_api = BackupApi::new(
            Arc::new(ExportDataUseCaseImpl {
                distributor_repository: distributors.clone(),
                product_repository: products.clone(),
                price_repository: prices.clone(),
                shopping_item_repository: shopping_items.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RestoreDataUseCaseImpl {
                distributor_repository: distributors.clone(),
                product_repository: products.clone(),
                price_repository: prices.clone(),
                shopping_item_repository: shopping_items.clone(),
                logger: logger.clone(),
                batch_size: import.batch_size,
            }),
            Arc::new(ClearAllDataUseCaseImpl {
                distributor_repository: distributors,
                product_repository: products,
                price_repository: prices,
                shopping_item_repository: shopping_items,
                logger,
            }),
        );

        Self {
            health_api,
            distributor_api,
            product_api,
            price_api,
            comparison_api,
            shopping_item_api,
            import_api,
            backup_api,
        }
    }
}
