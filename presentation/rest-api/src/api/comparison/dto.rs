use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::comparison::model::{
    ComparisonEntry, DashboardStats, HistoryPoint, PriceComparison, PriceHistory, Variation,
};

use crate::api::price::dto::PriceResponse;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct ComparisonEntryResponse {
    pub price_id: String,
    pub distributor_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub distributor_name: Option<String>,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
    pub is_best: bool,
    pub is_worst: bool,
    /// Difference to the best price
    pub savings: f64,
    pub savings_percent: f64,
}

impl From<ComparisonEntry> for ComparisonEntryResponse {
    fn from(entry: ComparisonEntry) -> Self {
        Self {
            price_id: entry.price_id.to_string(),
            distributor_id: entry.distributor_id.to_string(),
            distributor_name: entry.distributor_name,
            price: entry.price,
            recorded_at: entry.recorded_at,
            is_best: entry.is_best,
            is_worst: entry.is_worst,
            savings: entry.savings,
            savings_percent: entry.savings_percent,
        }
    }
}

/// Latest price per distributor, cheapest first.
#[derive(Debug, Clone, Object)]
pub struct PriceComparisonResponse {
    pub product: ProductResponse,
    pub entries: Vec<ComparisonEntryResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub best: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub worst: Option<f64>,
    /// Worst minus best
    pub savings: f64,
}

impl From<PriceComparison> for PriceComparisonResponse {
    fn from(comparison: PriceComparison) -> Self {
        Self {
            product: comparison.product.into(),
            entries: comparison.entries.into_iter().map(|e| e.into()).collect(),
            best: comparison.best,
            worst: comparison.worst,
            savings: comparison.savings,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct HistoryPointResponse {
    pub price_id: String,
    pub distributor_id: String,
    pub price: f64,
    pub recorded_at: DateTime<Utc>,
    /// Change against the previous point
    #[oai(skip_serializing_if_is_none)]
    pub change: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub change_percent: Option<f64>,
}

impl From<HistoryPoint> for HistoryPointResponse {
    fn from(point: HistoryPoint) -> Self {
        Self {
            price_id: point.price_id.to_string(),
            distributor_id: point.distributor_id.to_string(),
            price: point.price,
            recorded_at: point.recorded_at,
            change: point.change,
            change_percent: point.change_percent,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct VariationResponse {
    pub diff: f64,
    pub percent: f64,
    pub is_up: bool,
}

impl From<Variation> for VariationResponse {
    fn from(variation: Variation) -> Self {
        Self {
            diff: variation.diff,
            percent: variation.percent,
            is_up: variation.is_up,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceHistoryResponse {
    pub product: ProductResponse,
    #[oai(skip_serializing_if_is_none)]
    pub distributor_id: Option<String>,
    pub points: Vec<HistoryPointResponse>,
    /// First to last point
    #[oai(skip_serializing_if_is_none)]
    pub variation: Option<VariationResponse>,
}

impl From<PriceHistory> for PriceHistoryResponse {
    fn from(history: PriceHistory) -> Self {
        Self {
            product: history.product.into(),
            distributor_id: history.distributor_id.map(|id| id.to_string()),
            points: history.points.into_iter().map(|p| p.into()).collect(),
            variation: history.variation.map(|v| v.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DashboardResponse {
    pub distributors: u64,
    pub products: u64,
    pub prices: u64,
    /// Sum over products of their highest minus lowest price
    pub potential_savings: f64,
    pub recent_prices: Vec<PriceResponse>,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            distributors: stats.distributors,
            products: stats.products,
            prices: stats.prices,
            potential_savings: stats.potential_savings,
            recent_prices: stats.recent_prices.into_iter().map(|p| p.into()).collect(),
        }
    }
}
