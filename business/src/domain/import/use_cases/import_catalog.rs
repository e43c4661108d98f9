use async_trait::async_trait;

use crate::domain::import::errors::ImportError;
use crate::domain::import::model::{CatalogReport, Cell};

pub struct ImportCatalogParams {
    /// Row 0 is the header.
    pub rows: Vec<Vec<Cell>>,
}

#[async_trait]
pub trait ImportCatalogUseCase: Send + Sync {
    /// Inserts reference products (name and EAN) not yet known.
    async fn execute(&self, params: ImportCatalogParams) -> Result<CatalogReport, ImportError>;
}
