use async_trait::async_trait;

use crate::domain::import::errors::ImportError;
use crate::domain::import::model::{Cell, DistributorSelection, ImportReport};

pub struct ImportPriceListParams {
    /// Row 0 is the header.
    pub rows: Vec<Vec<Cell>>,
    pub distributor: DistributorSelection,
}

#[async_trait]
pub trait ImportPriceListUseCase: Send + Sync {
    async fn execute(&self, params: ImportPriceListParams) -> Result<ImportReport, ImportError>;
}
