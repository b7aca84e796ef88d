//! Configuration structures for the propiq market engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main configuration for the market engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Area aggregation configuration.
    pub area: AreaConfig,
    /// Demand/saturation classification thresholds.
    pub demand: DemandThresholds,
    /// Hot-zone scoring configuration.
    pub hot_zone: HotZoneConfig,
    /// Seasonal ranking configuration.
    pub seasonal: SeasonalConfig,
    /// Listing validation configuration.
    pub validation: ValidationConfig,
}

/// Area aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Assumed average floor area (m²) used for the price-per-sqm
    /// estimate when per-listing sizes are not aggregated.
    pub assumed_size_sqm: f64,
    /// Number of areas returned by the cheapest-areas view.
    pub top_n: usize,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            assumed_size_sqm: 80.0,
            top_n: 8,
        }
    }
}

/// Listing-count thresholds shared by the demand and saturation tier
/// vocabularies. Counts strictly above `upper_above` land in the upper
/// band, strictly above `middle_above` in the middle band, everything
/// else in the lower band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandThresholds {
    /// Lower bound (exclusive) of the upper band.
    pub upper_above: u32,
    /// Lower bound (exclusive) of the middle band.
    pub middle_above: u32,
}

impl Default for DemandThresholds {
    fn default() -> Self {
        Self {
            upper_above: 5,
            middle_above: 3,
        }
    }
}

/// Hot-zone scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotZoneConfig {
    /// Listings added on or after this date count as recent. A fixed
    /// analysis parameter, never derived from the current time.
    pub recent_cutoff: NaiveDate,
    /// Weight of the total listing count in the hot score.
    pub count_weight: f64,
    /// Weight of the recent-listing velocity in the hot score.
    pub velocity_weight: f64,
    /// Number of districts returned by the hottest-districts view.
    pub top_n: usize,
    /// Minimum score for the Extremely Hot tier.
    pub extremely_hot_min: f64,
    /// Minimum score for the Very Hot tier.
    pub very_hot_min: f64,
    /// Minimum score for the Hot tier.
    pub hot_min: f64,
}

impl Default for HotZoneConfig {
    fn default() -> Self {
        Self {
            recent_cutoff: NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid cutoff date"),
            count_weight: 0.4,
            velocity_weight: 0.6,
            top_n: 8,
            extremely_hot_min: 4.0,
            very_hot_min: 3.0,
            hot_min: 2.0,
        }
    }
}

/// Seasonal ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalConfig {
    /// Highest ascending-price rank still considered a good time to buy.
    pub buy_rank_max: u32,
    /// Lowest ascending-price rank considered a time to wait.
    pub wait_rank_min: u32,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            buy_rank_max: 4,
            wait_rank_min: 10,
        }
    }
}

/// How the validator treats malformed listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Drop malformed records, count them, and keep the rest.
    #[default]
    Skip,
    /// Fail the whole batch on the first malformed record.
    Reject,
}

/// Listing validation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Malformed-record policy.
    pub policy: ValidationPolicy,
}
