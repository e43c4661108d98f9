use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::price::model::PriceView;
use crate::domain::product::model::Product;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    pub price_id: Uuid,
    pub distributor_id: Uuid,
    pub distributor_name: Option<String>,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
    pub is_best: bool,
    pub is_worst: bool,
    /// Amount paid above the best offer.
    pub savings: f64,
    pub savings_percent: f64,
}

/// Current offers of one product, cheapest first.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceComparison {
    pub product: Product,
    pub entries: Vec<ComparisonEntry>,
    pub best: Option<f64>,
    pub worst: Option<f64>,
    /// Worst minus best; zero with fewer than two offers.
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub price_id: Uuid,
    pub distributor_id: Uuid,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
    /// Change against the previous point; `None` for the first one.
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    pub diff: f64,
    pub percent: f64,
    pub is_up: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    pub product: Product,
    pub distributor_id: Option<Uuid>,
    pub points: Vec<HistoryPoint>,
    /// First to last; `None` with fewer than two points.
    pub variation: Option<Variation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub distributors: u64,
    pub products: u64,
    pub prices: u64,
    pub potential_savings: f64,
    pub recent_prices: Vec<PriceView>,
}
