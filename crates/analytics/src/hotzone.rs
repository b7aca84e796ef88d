//! Hot-zone scoring (district activity ranking).
//!
//! Scores each (city, district) area by a weighted combination of its
//! total listing count and its recent-listing velocity, then ranks
//! districts by that score.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use propiq_core::config::HotZoneConfig;
use propiq_core::{rounded_mean, HotTier, Listing, Money};

use crate::group;

/// Activity summary for one hot district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotDistrict {
    /// City name.
    pub city: String,
    /// District name.
    pub district: String,
    /// Total number of listings.
    pub count: u32,
    /// Number of listings added on or after the recency cutoff.
    pub velocity: u32,
    /// Sum of listing prices.
    pub total_value: Money,
    /// Mean listing price, rounded.
    pub avg_price: Money,
    /// Weighted activity score.
    pub hot_score: f64,
    /// Hotness tier derived from the score.
    pub tier: HotTier,
}

/// Hot-zone scorer.
pub struct HotZoneScorer {
    config: HotZoneConfig,
}

impl HotZoneScorer {
    /// Create a new hot-zone scorer from configuration.
    pub fn new(config: HotZoneConfig) -> Self {
        Self { config }
    }

    /// Weighted hot score for a count/velocity pair.
    #[inline]
    fn score(&self, count: u32, velocity: u32) -> f64 {
        self.config.count_weight * f64::from(count)
            + self.config.velocity_weight * f64::from(velocity)
    }

    /// Score every district, descending by hot score.
    ///
    /// The sort is stable: districts with equal scores keep their
    /// discovery order.
    pub fn score_all(&self, listings: &[Listing]) -> Vec<HotDistrict> {
        let mut districts: Vec<HotDistrict> = group::by_area(listings)
            .iter()
            .map(|g| {
                let count = g.members.len() as u32;
                let velocity = g
                    .members
                    .iter()
                    .filter(|l| l.added_on_or_after(self.config.recent_cutoff))
                    .count() as u32;
                let total_value = g.price_sum();
                let hot_score = self.score(count, velocity);
                HotDistrict {
                    city: g.city.to_string(),
                    district: g.district.to_string(),
                    count,
                    velocity,
                    total_value,
                    avg_price: rounded_mean(total_value, g.members.len()),
                    hot_score,
                    tier: HotTier::for_score(hot_score, &self.config),
                }
            })
            .collect();

        districts.sort_by_key(|d| Reverse(OrderedFloat(d.hot_score)));
        districts
    }

    /// The `limit` hottest districts.
    pub fn hottest(&self, listings: &[Listing], limit: usize) -> Vec<HotDistrict> {
        let mut districts = self.score_all(listings);
        districts.truncate(limit);
        districts
    }
}
