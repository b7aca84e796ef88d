//! Price-trend series building.
//!
//! Pivots per-city monthly price samples into chart-ready rows and
//! derives growth rates from the sample history.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use propiq_core::{Money, PriceSample};

/// One city's price within a trend row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// City name.
    pub city: String,
    /// Average price for the row's month.
    pub avg_price: Money,
}

/// One month of the pivoted series, carrying a point for every city
/// that has a sample for that month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRow {
    /// Month tag, e.g. `"2024-01"`.
    pub month: String,
    /// Per-city prices, in city first-appearance order.
    pub points: Vec<TrendPoint>,
}

/// Pivot price samples into one row per distinct month.
///
/// Row order is the first-appearance order of each month in the input;
/// the builder does not sort, so chronological display order is the
/// caller's responsibility. The series is sparse: a city without a
/// sample for a month has no point in that row. A later sample for the
/// same (month, city) overwrites the earlier one.
pub fn build_series(samples: &[PriceSample]) -> Vec<TrendRow> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<TrendRow> = Vec::new();

    for sample in samples {
        let row = match index.get(sample.month.as_str()) {
            Some(&i) => &mut rows[i],
            None => {
                index.insert(sample.month.as_str(), rows.len());
                rows.push(TrendRow {
                    month: sample.month.clone(),
                    points: Vec::new(),
                });
                let i = rows.len() - 1;
                &mut rows[i]
            }
        };

        match row.points.iter_mut().find(|p| p.city == sample.city) {
            Some(point) => point.avg_price = sample.avg_price,
            None => row.points.push(TrendPoint {
                city: sample.city.clone(),
                avg_price: sample.avg_price,
            }),
        }
    }

    rows
}

/// Percentage change from the first to the last of a city's samples,
/// in input order, one decimal place.
///
/// Returns `None` for fewer than two samples or a zero first price.
pub fn growth_rate(samples: &[PriceSample], city: &str) -> Option<f64> {
    let mut series = samples.iter().filter(|s| s.city == city);

    let first = series.next()?.avg_price;
    let last = series.last()?.avg_price;
    if first == 0 {
        return None;
    }

    let pct = (last as f64 - first as f64) / first as f64 * 100.0;
    Some((pct * 10.0).round() / 10.0)
}
