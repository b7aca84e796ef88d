//! Seasonal price ranking (best time to buy).
//!
//! Ranks the twelve calendar months by average price and classifies
//! each month's buy outlook from its rank.

use serde::{Deserialize, Serialize};

use propiq_core::config::SeasonalConfig;
use propiq_core::{BuyOutlook, Error, Money, Result, SeasonalSample};

/// Number of samples a seasonal analysis requires.
const MONTHS_PER_YEAR: usize = 12;

/// One month annotated with its ascending-price rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMonth {
    /// Month label, e.g. `"Jan"`.
    pub month: String,
    /// Average price for the month.
    pub avg_price: Money,
    /// Listing volume for the month.
    pub listing_count: u32,
    /// 1-based position in the ascending-price order (1 = cheapest).
    pub rank: u32,
    /// Buy-timing outlook derived from the rank.
    pub outlook: BuyOutlook,
}

/// Full seasonal analysis over one year of monthly samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalReport {
    /// All twelve months in input (calendar) order.
    pub months: Vec<RankedMonth>,
    /// The cheapest month (rank 1).
    pub best: RankedMonth,
    /// The most expensive month (rank 12).
    pub worst: RankedMonth,
    /// Absolute price difference between worst and best.
    pub price_spread: Money,
    /// Savings between worst and best as a percentage of the worst
    /// price, one decimal place.
    pub savings_pct: f64,
}

/// Seasonal ranker.
pub struct SeasonalRanker {
    buy_rank_max: u32,
    wait_rank_min: u32,
}

impl SeasonalRanker {
    /// Create a new seasonal ranker from configuration.
    pub fn new(config: &SeasonalConfig) -> Self {
        Self {
            buy_rank_max: config.buy_rank_max,
            wait_rank_min: config.wait_rank_min,
        }
    }

    fn outlook(&self, rank: u32) -> BuyOutlook {
        if rank <= self.buy_rank_max {
            BuyOutlook::Buy
        } else if rank >= self.wait_rank_min {
            BuyOutlook::Wait
        } else {
            BuyOutlook::Neutral
        }
    }

    /// Rank a full year of seasonal samples.
    ///
    /// Months keep their input order in the report; ranks come from the
    /// stable ascending-by-price order, so equal prices rank by input
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientData`] unless exactly twelve
    /// samples are supplied.
    pub fn rank(&self, samples: &[SeasonalSample]) -> Result<SeasonalReport> {
        if samples.len() != MONTHS_PER_YEAR {
            return Err(Error::insufficient_data(format!(
                "seasonal analysis needs exactly {MONTHS_PER_YEAR} monthly samples, got {}",
                samples.len()
            )));
        }

        // Stable ascending order of sample indices by price.
        let mut order: Vec<usize> = (0..samples.len()).collect();
        order.sort_by_key(|&i| samples[i].avg_price);

        let mut rank_of = vec![0u32; samples.len()];
        for (pos, &i) in order.iter().enumerate() {
            rank_of[i] = pos as u32 + 1;
        }

        let months: Vec<RankedMonth> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| RankedMonth {
                month: s.month.clone(),
                avg_price: s.avg_price,
                listing_count: s.listing_count,
                rank: rank_of[i],
                outlook: self.outlook(rank_of[i]),
            })
            .collect();

        let best = months[order[0]].clone();
        let worst = months[order[samples.len() - 1]].clone();
        let price_spread = worst.avg_price - best.avg_price;
        let savings_pct = if worst.avg_price > 0 {
            round_one_decimal(price_spread as f64 / worst.avg_price as f64 * 100.0)
        } else {
            0.0
        };

        Ok(SeasonalReport {
            months,
            best,
            worst,
            price_spread,
            savings_pct,
        })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
