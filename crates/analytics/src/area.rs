//! Area aggregation (per-district price summaries).
//!
//! Groups listings by (city, district) and derives the average price
//! and price-per-sqm estimate used by the affordability views.

use serde::{Deserialize, Serialize};

use propiq_core::config::AreaConfig;
use propiq_core::{price_per_sqm, rounded_mean, Listing, Money};

use crate::group;

/// Price summary for one (city, district) area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// City name.
    pub city: String,
    /// District name.
    pub district: String,
    /// Number of listings in the area.
    pub count: u32,
    /// Mean listing price, rounded to the nearest whole unit.
    pub avg_price: Money,
    /// Price-per-sqm estimate from the assumed average floor area.
    pub price_per_sqm: Money,
}

/// Area aggregator.
pub struct AreaAggregator {
    assumed_size_sqm: f64,
}

impl AreaAggregator {
    /// Create a new area aggregator from configuration.
    pub fn new(config: &AreaConfig) -> Self {
        Self {
            assumed_size_sqm: config.assumed_size_sqm,
        }
    }

    /// Summarize every area, in key discovery order.
    pub fn summarize(&self, listings: &[Listing]) -> Vec<AreaSummary> {
        group::by_area(listings)
            .iter()
            .map(|g| {
                let avg_price = rounded_mean(g.price_sum(), g.members.len());
                AreaSummary {
                    city: g.city.to_string(),
                    district: g.district.to_string(),
                    count: g.members.len() as u32,
                    avg_price,
                    price_per_sqm: price_per_sqm(avg_price, self.assumed_size_sqm),
                }
            })
            .collect()
    }

    /// The `limit` cheapest areas, ascending by average price.
    ///
    /// The sort is stable: areas with equal averages keep their
    /// discovery order.
    pub fn cheapest(&self, listings: &[Listing], limit: usize) -> Vec<AreaSummary> {
        let mut summaries = self.summarize(listings);
        summaries.sort_by_key(|a| a.avg_price);
        summaries.truncate(limit);
        summaries
    }
}
