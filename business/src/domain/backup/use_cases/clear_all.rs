use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::TableCounts;

#[async_trait]
pub trait ClearAllDataUseCase: Send + Sync {
    /// Returns how many rows were removed per table.
    async fn execute(&self) -> Result<TableCounts, BackupError>;
}
