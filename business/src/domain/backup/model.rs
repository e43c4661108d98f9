use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::distributor::model::Distributor;
use crate::domain::price::model::Price;
use crate::domain::product::model::Product;
use crate::domain::shopping_item::model::ShoppingItem;

pub const SNAPSHOT_VERSION: &str = "1.0";

/// Every record of every table, as written by an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub distributors: Vec<Distributor>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub prices: Vec<Price>,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingItem>,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

impl Snapshot {
    pub fn new(
        distributors: Vec<Distributor>,
        products: Vec<Product>,
        prices: Vec<Price>,
        shopping_list: Vec<ShoppingItem>,
    ) -> Self {
        Self {
            distributors,
            products,
            prices,
            shopping_list,
            exported_at: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        }
    }

    /// Only the major version has to match.
    pub fn is_supported(&self) -> bool {
        let major = |v: &str| v.split('.').next().map(str::to_string);
        major(&self.version) == major(SNAPSHOT_VERSION)
    }
}

/// Row counts per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub distributors: u64,
    pub products: u64,
    pub prices: u64,
    pub shopping_list: u64,
}
