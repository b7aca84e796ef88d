//! Listing validation.
//!
//! Rejects malformed listings before they reach aggregation, either by
//! skipping individual records (the default) or by failing the whole
//! batch on the first bad record.

use propiq_core::config::ValidationPolicy;
use propiq_core::{Error, Listing, Result};

/// Why a listing was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RejectReason {
    ZeroPrice,
    BadSize,
    BlankField,
    ZeroRooms,
}

impl RejectReason {
    fn describe(self) -> &'static str {
        match self {
            RejectReason::ZeroPrice => "price must be positive",
            RejectReason::BadSize => "size must be positive and finite",
            RejectReason::BlankField => "required text field is blank",
            RejectReason::ZeroRooms => "room count must be positive when present",
        }
    }
}

/// Statistics about validation quality.
#[derive(Debug, Clone, Default)]
pub struct ValidationStats {
    /// Total listings seen.
    pub total: u64,
    /// Listings that passed validation.
    pub accepted: u64,
    /// Listings rejected for a zero price.
    pub zero_price: u64,
    /// Listings rejected for a non-positive or non-finite size.
    pub bad_size: u64,
    /// Listings rejected for a blank id/title/city/district.
    pub blank_field: u64,
    /// Listings rejected for a zero room count.
    pub zero_rooms: u64,
}

impl ValidationStats {
    /// Total number of rejected listings.
    pub fn rejected(&self) -> u64 {
        self.zero_price + self.bad_size + self.blank_field + self.zero_rooms
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validator that filters malformed listings according to the
/// configured policy.
pub struct ListingValidator {
    policy: ValidationPolicy,
    stats: ValidationStats,
}

impl ListingValidator {
    /// Create a new validator with the given policy.
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            stats: ValidationStats::default(),
        }
    }

    /// Check a single listing, returning the first defect found.
    fn check(listing: &Listing) -> Option<RejectReason> {
        if listing.id.trim().is_empty()
            || listing.title.trim().is_empty()
            || listing.city.trim().is_empty()
            || listing.district.trim().is_empty()
        {
            return Some(RejectReason::BlankField);
        }
        if listing.price == 0 {
            return Some(RejectReason::ZeroPrice);
        }
        if !listing.size_sqm.is_finite() || listing.size_sqm <= 0.0 {
            return Some(RejectReason::BadSize);
        }
        if listing.rooms == Some(0) {
            return Some(RejectReason::ZeroRooms);
        }
        None
    }

    /// Validate a batch of listings.
    ///
    /// Under [`ValidationPolicy::Skip`] malformed records are dropped,
    /// counted in the statistics and logged; the accepted records keep
    /// their input order. Under [`ValidationPolicy::Reject`] the first
    /// malformed record fails the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] under the reject policy when any
    /// record is malformed.
    pub fn validate_batch(&mut self, listings: Vec<Listing>) -> Result<Vec<Listing>> {
        let mut accepted = Vec::with_capacity(listings.len());

        for listing in listings {
            self.stats.total += 1;

            match Self::check(&listing) {
                None => {
                    self.stats.accepted += 1;
                    accepted.push(listing);
                }
                Some(reason) => {
                    if self.policy == ValidationPolicy::Reject {
                        return Err(Error::validation(format!(
                            "listing '{}': {}",
                            listing.id,
                            reason.describe()
                        )));
                    }

                    tracing::warn!(
                        id = %listing.id,
                        reason = reason.describe(),
                        "skipping malformed listing"
                    );

                    match reason {
                        RejectReason::ZeroPrice => self.stats.zero_price += 1,
                        RejectReason::BadSize => self.stats.bad_size += 1,
                        RejectReason::BlankField => self.stats.blank_field += 1,
                        RejectReason::ZeroRooms => self.stats.zero_rooms += 1,
                    }
                }
            }
        }

        Ok(accepted)
    }

    /// Get validation statistics.
    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use propiq_core::PropertyType;

    fn make_listing(id: &str, price: u64, size: f64) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            price,
            city: "Tbilisi".to_string(),
            district: "Vake".to_string(),
            property_type: PropertyType::Apartment,
            size_sqm: size,
            rooms: Some(2),
            date_added: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            coordinates: (44.8176, 41.7151),
        }
    }

    #[test]
    fn test_accepts_well_formed_batch() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let accepted = validator
            .validate_batch(vec![make_listing("1", 100_000, 85.0), make_listing("2", 95_000, 45.0)])
            .unwrap();

        assert_eq!(accepted.len(), 2);
        assert_eq!(validator.stats().total, 2);
        assert_eq!(validator.stats().rejected(), 0);
    }

    #[test]
    fn test_skip_drops_zero_price() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let accepted = validator
            .validate_batch(vec![make_listing("1", 0, 85.0), make_listing("2", 95_000, 45.0)])
            .unwrap();

        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, "2");
        assert_eq!(validator.stats().zero_price, 1);
        assert_eq!(validator.stats().accepted, 1);
    }

    #[test]
    fn test_skip_drops_bad_size() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let accepted = validator
            .validate_batch(vec![
                make_listing("1", 100_000, 0.0),
                make_listing("2", 100_000, -5.0),
                make_listing("3", 100_000, f64::NAN),
            ])
            .unwrap();

        assert!(accepted.is_empty());
        assert_eq!(validator.stats().bad_size, 3);
    }

    #[test]
    fn test_skip_drops_blank_fields() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let mut blank_city = make_listing("1", 100_000, 85.0);
        blank_city.city = "  ".to_string();

        let accepted = validator.validate_batch(vec![blank_city]).unwrap();

        assert!(accepted.is_empty());
        assert_eq!(validator.stats().blank_field, 1);
    }

    #[test]
    fn test_skip_drops_zero_rooms() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let mut listing = make_listing("1", 100_000, 85.0);
        listing.rooms = Some(0);

        let accepted = validator.validate_batch(vec![listing]).unwrap();

        assert!(accepted.is_empty());
        assert_eq!(validator.stats().zero_rooms, 1);
    }

    #[test]
    fn test_missing_rooms_is_valid() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let mut listing = make_listing("1", 100_000, 85.0);
        listing.rooms = None;

        let accepted = validator.validate_batch(vec![listing]).unwrap();
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn test_reject_fails_whole_batch() {
        let mut validator = ListingValidator::new(ValidationPolicy::Reject);

        let result = validator.validate_batch(vec![
            make_listing("1", 100_000, 85.0),
            make_listing("2", 0, 45.0),
        ]);

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_skip_preserves_input_order() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);

        let accepted = validator
            .validate_batch(vec![
                make_listing("1", 100_000, 85.0),
                make_listing("2", 0, 45.0),
                make_listing("3", 95_000, 60.0),
                make_listing("4", 55_000, 70.0),
            ])
            .unwrap();

        let ids: Vec<&str> = accepted.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_stats_reset() {
        let mut validator = ListingValidator::new(ValidationPolicy::Skip);
        validator.validate_batch(vec![make_listing("1", 0, 85.0)]).unwrap();
        assert_eq!(validator.stats().rejected(), 1);

        validator.reset_stats();
        assert_eq!(validator.stats().total, 0);
        assert_eq!(validator.stats().rejected(), 0);
    }
}
