use std::collections::HashMap;

use uuid::Uuid;

use super::model::{ComparisonEntry, HistoryPoint, Variation};
use crate::domain::price::model::Price;

/// How many rows the dashboard shows as recent activity.
pub const RECENT_PRICES_LIMIT: usize = 5;

/// Keeps the latest row of each distributor.
///
/// On equal `recorded_at` the row seen first wins. The result is sorted by
/// price ascending, then by distributor id so the output does not depend on
/// input order.
pub fn latest_per_distributor(prices: &[Price]) -> Vec<Price> {
    let mut latest: HashMap<Uuid, &Price> = HashMap::new();

    for price in prices {
        match latest.get(&price.distributor_id) {
            Some(current) if current.recorded_at >= price.recorded_at => {}
            _ => {
                latest.insert(price.distributor_id, price);
            }
        }
    }

    let mut rows: Vec<Price> = latest.into_values().cloned().collect();
    rows.sort_by(|a, b| {
        a.price
            .total_cmp(&b.price)
            .then_with(|| a.distributor_id.cmp(&b.distributor_id))
    });
    rows
}

fn percent_of(diff: f64, base: f64) -> f64 {
    if base == 0.0 { 0.0 } else { diff / base * 100.0 }
}

/// Ranks the current offers: the first is the best, the last the worst
/// (only when there are at least two).
pub fn rank_offers(
    prices: &[Price],
    distributor_name: impl Fn(Uuid) -> Option<String>,
) -> Vec<ComparisonEntry> {
    let rows = latest_per_distributor(prices);
    let Some(best) = rows.first().map(|p| p.price) else {
        return Vec::new();
    };
    let count = rows.len();

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let savings = if index == 0 { 0.0 } else { row.price - best };
            ComparisonEntry {
                price_id: row.id,
                distributor_id: row.distributor_id,
                distributor_name: distributor_name(row.distributor_id),
                price: row.price,
                recorded_at: row.recorded_at,
                is_best: index == 0,
                is_worst: count > 1 && index == count - 1,
                savings,
                savings_percent: percent_of(savings, best),
            }
        })
        .collect()
}

/// Attaches the change against the previous point to each row.
///
/// Expects rows ordered by `recorded_at` ascending.
pub fn history_points(prices: &[Price]) -> Vec<HistoryPoint> {
    let mut previous: Option<f64> = None;

    prices
        .iter()
        .map(|row| {
            let change = previous.map(|p| row.price - p);
            let change_percent = previous.zip(change).map(|(p, c)| percent_of(c, p));
            previous = Some(row.price);
            HistoryPoint {
                price_id: row.id,
                distributor_id: row.distributor_id,
                price: row.price,
                recorded_at: row.recorded_at,
                change,
                change_percent,
            }
        })
        .collect()
}

pub fn variation(points: &[HistoryPoint]) -> Option<Variation> {
    if points.len() < 2 {
        return None;
    }
    let first = points.first()?.price;
    let last = points.last()?.price;
    let diff = last - first;

    Some(Variation {
        diff,
        percent: percent_of(diff, first),
        is_up: diff > 0.0,
    })
}

/// Sum over products with more than one price row of (max - min).
pub fn potential_savings(prices: &[Price]) -> f64 {
    let mut ranges: HashMap<Uuid, (f64, f64, usize)> = HashMap::new();

    for row in prices {
        let entry = ranges
            .entry(row.product_id)
            .or_insert((row.price, row.price, 0));
        entry.0 = entry.0.min(row.price);
        entry.1 = entry.1.max(row.price);
        entry.2 += 1;
    }

    ranges
        .values()
        .filter(|(_, _, count)| *count > 1)
        .map(|(min, max, _)| max - min)
        .sum()
}
