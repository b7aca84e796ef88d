//! Market aggregation and ranking for the propiq system.
//!
//! This crate handles:
//! - Area (city, district) price aggregation and cheapest-areas ranking
//! - City demand/saturation classification
//! - Seasonal buy-timing analysis
//! - Hot-zone scoring of district activity
//! - Price-trend series pivoting and growth rates
//! - Market overview statistics

mod group;

pub mod area;
pub mod demand;
pub mod engine;
pub mod hotzone;
pub mod seasonal;
pub mod stats;
pub mod trend;

pub use area::AreaAggregator;
pub use demand::DemandClassifier;
pub use engine::MarketEngine;
pub use hotzone::HotZoneScorer;
pub use seasonal::SeasonalRanker;
