//! First-occurrence-order grouping of listings.
//!
//! One shared grouping pass feeds both the area aggregator and the
//! hot-zone scorer. Discovery order (the order in which each key first
//! appears in the input) is preserved because it is the documented
//! tie-break for every ranked view.

use std::collections::HashMap;

use propiq_core::{Listing, Money};

/// Listings grouped under one (city, district) key.
#[derive(Debug)]
pub(crate) struct AreaGroup<'a> {
    pub city: &'a str,
    pub district: &'a str,
    pub members: Vec<&'a Listing>,
}

impl AreaGroup<'_> {
    /// Sum of member prices.
    pub fn price_sum(&self) -> Money {
        self.members.iter().map(|l| l.price).sum()
    }
}

/// Listings grouped under one city.
#[derive(Debug)]
pub(crate) struct CityGroup<'a> {
    pub city: &'a str,
    pub members: Vec<&'a Listing>,
}

impl CityGroup<'_> {
    /// Sum of member prices.
    pub fn price_sum(&self) -> Money {
        self.members.iter().map(|l| l.price).sum()
    }
}

/// Group listings by (city, district) in key discovery order.
pub(crate) fn by_area(listings: &[Listing]) -> Vec<AreaGroup<'_>> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<AreaGroup<'_>> = Vec::new();

    for listing in listings {
        let key = (listing.city.as_str(), listing.district.as_str());
        match index.get(&key) {
            Some(&i) => groups[i].members.push(listing),
            None => {
                index.insert(key, groups.len());
                groups.push(AreaGroup {
                    city: key.0,
                    district: key.1,
                    members: vec![listing],
                });
            }
        }
    }

    groups
}

/// Group listings by city in key discovery order.
pub(crate) fn by_city(listings: &[Listing]) -> Vec<CityGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<CityGroup<'_>> = Vec::new();

    for listing in listings {
        let key = listing.city.as_str();
        match index.get(key) {
            Some(&i) => groups[i].members.push(listing),
            None => {
                index.insert(key, groups.len());
                groups.push(CityGroup {
                    city: key,
                    members: vec![listing],
                });
            }
        }
    }

    groups
}
