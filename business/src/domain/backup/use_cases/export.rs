use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::Snapshot;

#[async_trait]
pub trait ExportDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<Snapshot, BackupError>;
}
