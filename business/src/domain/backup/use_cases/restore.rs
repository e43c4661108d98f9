use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::{Snapshot, TableCounts};

pub struct RestoreDataParams {
    pub snapshot: Snapshot,
}

#[async_trait]
pub trait RestoreDataUseCase: Send + Sync {
    /// Replaces every table with the snapshot, keeping ids and timestamps.
    async fn execute(&self, params: RestoreDataParams) -> Result<TableCounts, BackupError>;
}
