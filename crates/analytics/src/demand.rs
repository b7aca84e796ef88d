//! City demand classification.
//!
//! Derives per-city activity summaries and assigns both tier
//! vocabularies (demand and saturation) from one threshold table.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use propiq_core::config::DemandThresholds;
use propiq_core::{
    price_per_sqm, rounded_mean, ActivityBand, DemandTier, Listing, Money, SaturationLevel,
};

use crate::group;

/// Activity summary for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityActivity {
    /// City name.
    pub city: String,
    /// Number of active listings.
    pub count: u32,
    /// Mean listing price, rounded.
    pub avg_price: Money,
    /// Price-per-sqm estimate from the assumed average floor area.
    pub price_per_sqm: Money,
    /// Buyer-demand tier.
    pub demand: DemandTier,
    /// Market-saturation level.
    pub saturation: SaturationLevel,
}

/// City demand classifier.
pub struct DemandClassifier {
    thresholds: DemandThresholds,
    assumed_size_sqm: f64,
}

impl DemandClassifier {
    /// Create a new classifier from the threshold table and the
    /// price-per-sqm divisor.
    pub fn new(thresholds: DemandThresholds, assumed_size_sqm: f64) -> Self {
        Self {
            thresholds,
            assumed_size_sqm,
        }
    }

    /// Activity band for a listing count. Total over all counts.
    pub fn band(&self, count: u32) -> ActivityBand {
        ActivityBand::for_count(count, &self.thresholds)
    }

    /// Per-city activity summaries, descending by listing count.
    ///
    /// The sort is stable: cities with equal counts keep their
    /// discovery order.
    pub fn city_activity(&self, listings: &[Listing]) -> Vec<CityActivity> {
        let mut cities: Vec<CityActivity> = group::by_city(listings)
            .iter()
            .map(|g| {
                let count = g.members.len() as u32;
                let avg_price = rounded_mean(g.price_sum(), g.members.len());
                let band = self.band(count);
                CityActivity {
                    city: g.city.to_string(),
                    count,
                    avg_price,
                    price_per_sqm: price_per_sqm(avg_price, self.assumed_size_sqm),
                    demand: band.into(),
                    saturation: band.into(),
                }
            })
            .collect();

        cities.sort_by_key(|c| Reverse(c.count));
        cities
    }
}
