//! Core data types for the propiq market engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{DemandThresholds, HotZoneConfig};

/// Price in whole currency units (no minor units).
pub type Money = u64;

/// Arithmetic mean of a price sum, rounded to the nearest whole unit.
///
/// Returns 0 for an empty group instead of dividing by zero.
#[inline]
pub fn rounded_mean(sum: Money, count: usize) -> Money {
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as Money
}

/// Price per square meter using a fixed assumed floor area.
///
/// The divisor is a deliberate market-wide approximation, not a
/// per-listing ratio.
#[inline]
pub fn price_per_sqm(avg_price: Money, assumed_size_sqm: f64) -> Money {
    if assumed_size_sqm <= 0.0 {
        return 0;
    }
    (avg_price as f64 / assumed_size_sqm).round() as Money
}

/// Property category. Unknown values fall into the `Other` bucket so
/// aggregation stays total over any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    #[serde(other)]
    Other,
}

/// A single property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Asking price.
    pub price: Money,
    /// City name.
    pub city: String,
    /// District name within the city.
    pub district: String,
    /// Property category.
    pub property_type: PropertyType,
    /// Floor area in square meters.
    pub size_sqm: f64,
    /// Room count, when known.
    #[serde(default)]
    pub rooms: Option<u32>,
    /// Date the listing was added.
    pub date_added: NaiveDate,
    /// Geocoordinate (longitude, latitude). Unused by aggregation.
    pub coordinates: (f64, f64),
}

impl Listing {
    /// Whether the listing was added on or after the given cutoff date.
    #[inline]
    pub fn added_on_or_after(&self, cutoff: NaiveDate) -> bool {
        self.date_added >= cutoff
    }
}

/// A (month, city, property type) average-price observation used to
/// build per-city time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Month tag, e.g. `"2024-01"`. Callers supply samples in
    /// chronological order.
    pub month: String,
    /// City the sample belongs to.
    pub city: String,
    /// Property category the sample covers.
    pub property_type: PropertyType,
    /// Average price observed for the month.
    pub avg_price: Money,
}

/// One calendar month of seasonal pricing data. A full analysis takes
/// exactly twelve of these, in Jan→Dec order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSample {
    /// Month label, e.g. `"Jan"`.
    pub month: String,
    /// Average price across the market for the month.
    pub avg_price: Money,
    /// Number of listings observed in the month.
    pub listing_count: u32,
}

/// Discrete activity band for a listing count. Both tier vocabularies
/// (demand and saturation) map from this single classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityBand {
    Upper,
    Middle,
    Lower,
}

impl ActivityBand {
    /// Classify a listing count against the configured thresholds.
    ///
    /// Total: every count maps to exactly one band.
    pub fn for_count(count: u32, thresholds: &DemandThresholds) -> Self {
        if count > thresholds.upper_above {
            ActivityBand::Upper
        } else if count > thresholds.middle_above {
            ActivityBand::Middle
        } else {
            ActivityBand::Lower
        }
    }
}

/// Buyer-demand tier for a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DemandTier {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
}

impl From<ActivityBand> for DemandTier {
    fn from(band: ActivityBand) -> Self {
        match band {
            ActivityBand::Upper => DemandTier::VeryHigh,
            ActivityBand::Middle => DemandTier::High,
            ActivityBand::Lower => DemandTier::Moderate,
        }
    }
}

/// Market-saturation level for a city. Same thresholds as
/// [`DemandTier`], different vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaturationLevel {
    High,
    Medium,
    Low,
}

impl From<ActivityBand> for SaturationLevel {
    fn from(band: ActivityBand) -> Self {
        match band {
            ActivityBand::Upper => SaturationLevel::High,
            ActivityBand::Middle => SaturationLevel::Medium,
            ActivityBand::Lower => SaturationLevel::Low,
        }
    }
}

/// Hotness tier for a district, derived from its hot score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotTier {
    #[serde(rename = "Extremely Hot")]
    ExtremelyHot,
    #[serde(rename = "Very Hot")]
    VeryHot,
    Hot,
    Warm,
}

impl HotTier {
    /// Map a hot score to its tier using the configured cut points.
    pub fn for_score(score: f64, config: &HotZoneConfig) -> Self {
        if score >= config.extremely_hot_min {
            HotTier::ExtremelyHot
        } else if score >= config.very_hot_min {
            HotTier::VeryHot
        } else if score >= config.hot_min {
            HotTier::Hot
        } else {
            HotTier::Warm
        }
    }
}

/// Buy-timing outlook for a month, derived from its seasonal rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyOutlook {
    /// Among the cheapest months; good time to buy.
    Buy,
    Neutral,
    /// Among the most expensive months; consider waiting.
    Wait,
}
