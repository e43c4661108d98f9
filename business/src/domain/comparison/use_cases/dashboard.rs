use async_trait::async_trait;

use crate::domain::comparison::errors::ComparisonError;
use crate::domain::comparison::model::DashboardStats;

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, ComparisonError>;
}
