//! Market overview statistics.
//!
//! Folds the full listing collection into the headline numbers: total
//! volume, overall average price, per-city activity and the
//! property-type distribution.

use serde::{Deserialize, Serialize};

use propiq_core::{rounded_mean, Listing, Money, PropertyType};

use crate::demand::{CityActivity, DemandClassifier};

/// Share of one property type in the listing supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeShare {
    /// Property category.
    pub property_type: PropertyType,
    /// Number of listings of this type.
    pub count: u32,
    /// Integer percentage of the total supply.
    pub share_pct: u32,
}

/// Headline statistics for the whole market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    /// Total number of listings.
    pub total_listings: u32,
    /// Mean price across all listings, rounded; 0 when empty.
    pub avg_price: Money,
    /// Per-city activity, descending by listing count.
    pub cities: Vec<CityActivity>,
    /// Supply share per property type, in type discovery order.
    pub type_distribution: Vec<TypeShare>,
}

/// Supply share per property type, in the order each type first
/// appears in the input. Unknown types are already bucketed as
/// [`PropertyType::Other`] at the data edge.
pub fn type_distribution(listings: &[Listing]) -> Vec<TypeShare> {
    let mut counts: Vec<(PropertyType, u32)> = Vec::new();

    for listing in listings {
        match counts.iter_mut().find(|(t, _)| *t == listing.property_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((listing.property_type, 1)),
        }
    }

    let total = listings.len() as f64;
    counts
        .into_iter()
        .map(|(property_type, count)| TypeShare {
            property_type,
            count,
            share_pct: (count as f64 / total * 100.0).round() as u32,
        })
        .collect()
}

/// Compute the market overview.
pub fn overview(listings: &[Listing], classifier: &DemandClassifier) -> MarketStats {
    let price_sum: Money = listings.iter().map(|l| l.price).sum();

    MarketStats {
        total_listings: listings.len() as u32,
        avg_price: rounded_mean(price_sum, listings.len()),
        cities: classifier.city_activity(listings),
        type_distribution: type_distribution(listings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use propiq_core::config::DemandThresholds;

    fn make_listing(id: u32, city: &str, price: u64, property_type: PropertyType) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            price,
            city: city.to_string(),
            district: "Center".to_string(),
            property_type,
            size_sqm: 70.0,
            rooms: Some(2),
            date_added: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            coordinates: (44.8, 41.7),
        }
    }

    fn classifier() -> DemandClassifier {
        DemandClassifier::new(DemandThresholds::default(), 80.0)
    }

    #[test]
    fn test_type_distribution() {
        let listings = vec![
            make_listing(1, "Tbilisi", 185_000, PropertyType::Apartment),
            make_listing(2, "Tbilisi", 450_000, PropertyType::House),
            make_listing(3, "Tbilisi", 320_000, PropertyType::Commercial),
            make_listing(4, "Tbilisi", 125_000, PropertyType::Apartment),
        ];

        let shares = type_distribution(&listings);

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].property_type, PropertyType::Apartment);
        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[0].share_pct, 50);
        assert_eq!(shares[1].property_type, PropertyType::House);
        assert_eq!(shares[1].share_pct, 25);
    }

    #[test]
    fn test_other_bucket_counted() {
        let listings = vec![
            make_listing(1, "Tbilisi", 185_000, PropertyType::Apartment),
            make_listing(2, "Telavi", 140_000, PropertyType::Other),
        ];

        let shares = type_distribution(&listings);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[1].property_type, PropertyType::Other);
        assert_eq!(shares[1].count, 1);
    }

    #[test]
    fn test_overview() {
        let listings = vec![
            make_listing(1, "Tbilisi", 100_000, PropertyType::Apartment),
            make_listing(2, "Tbilisi", 200_000, PropertyType::House),
            make_listing(3, "Batumi", 300_000, PropertyType::Apartment),
        ];

        let stats = overview(&listings, &classifier());

        assert_eq!(stats.total_listings, 3);
        assert_eq!(stats.avg_price, 200_000);
        assert_eq!(stats.cities.len(), 2);
        assert_eq!(stats.cities[0].city, "Tbilisi");
        assert_eq!(stats.type_distribution.len(), 2);
    }

    #[test]
    fn test_overview_empty_input() {
        let stats = overview(&[], &classifier());

        assert_eq!(stats.total_listings, 0);
        assert_eq!(stats.avg_price, 0);
        assert!(stats.cities.is_empty());
        assert!(stats.type_distribution.is_empty());
    }
}
