//! Market engine facade.
//!
//! Combines all aggregation components behind a single stateless
//! interface configured once.

use propiq_core::{EngineConfig, Listing, PriceSample, Result, SeasonalSample};

use crate::area::{AreaAggregator, AreaSummary};
use crate::demand::{CityActivity, DemandClassifier};
use crate::hotzone::{HotDistrict, HotZoneScorer};
use crate::seasonal::{SeasonalRanker, SeasonalReport};
use crate::stats::{self, MarketStats};
use crate::trend::{self, TrendRow};

/// Market aggregation engine.
///
/// Every method is a pure transformation of its input; the engine
/// holds configuration only, never data.
pub struct MarketEngine {
    areas: AreaAggregator,
    demand: DemandClassifier,
    seasonal: SeasonalRanker,
    hot_zones: HotZoneScorer,
    area_top_n: usize,
    hot_top_n: usize,
}

impl MarketEngine {
    /// Create a new market engine from configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            areas: AreaAggregator::new(&config.area),
            demand: DemandClassifier::new(
                config.demand.clone(),
                config.area.assumed_size_sqm,
            ),
            seasonal: SeasonalRanker::new(&config.seasonal),
            hot_zones: HotZoneScorer::new(config.hot_zone.clone()),
            area_top_n: config.area.top_n,
            hot_top_n: config.hot_zone.top_n,
        }
    }

    /// Every area's price summary, in key discovery order.
    pub fn area_summaries(&self, listings: &[Listing]) -> Vec<AreaSummary> {
        self.areas.summarize(listings)
    }

    /// The configured top-N cheapest areas, ascending by average price.
    pub fn cheapest_areas(&self, listings: &[Listing]) -> Vec<AreaSummary> {
        self.areas.cheapest(listings, self.area_top_n)
    }

    /// Per-city activity with demand and saturation tiers, descending
    /// by listing count.
    pub fn city_activity(&self, listings: &[Listing]) -> Vec<CityActivity> {
        self.demand.city_activity(listings)
    }

    /// The configured top-N hottest districts, descending by hot score.
    pub fn hot_districts(&self, listings: &[Listing]) -> Vec<HotDistrict> {
        self.hot_zones.hottest(listings, self.hot_top_n)
    }

    /// Seasonal buy-timing analysis over twelve monthly samples.
    ///
    /// # Errors
    ///
    /// Returns [`propiq_core::Error::InsufficientData`] unless exactly
    /// twelve samples are supplied.
    pub fn seasonal_report(&self, samples: &[SeasonalSample]) -> Result<SeasonalReport> {
        self.seasonal.rank(samples)
    }

    /// Per-city price series pivoted for display, one row per month in
    /// first-appearance order.
    pub fn price_trends(&self, samples: &[PriceSample]) -> Vec<TrendRow> {
        trend::build_series(samples)
    }

    /// Growth rate of a city's price series, first sample to last.
    pub fn growth_rate(&self, samples: &[PriceSample], city: &str) -> Option<f64> {
        trend::growth_rate(samples, city)
    }

    /// Headline statistics for the whole market.
    pub fn market_stats(&self, listings: &[Listing]) -> MarketStats {
        stats::overview(listings, &self.demand)
    }
}
