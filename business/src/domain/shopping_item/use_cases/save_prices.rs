use async_trait::async_trait;

use crate::domain::shopping_item::errors::ShoppingItemError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavePricesReport {
    pub saved: u64,
    pub failed: u64,
}

#[async_trait]
pub trait SaveListPricesUseCase: Send + Sync {
    /// Records a price row for every line with a positive price and a distributor.
    async fn execute(&self) -> Result<SavePricesReport, ShoppingItemError>;
}
