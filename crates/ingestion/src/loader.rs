//! Dataset loading from JSON.
//!
//! Parses listings, price history and seasonal samples from JSON text
//! or readers. Parsing is purely structural; semantic validation is the
//! [`crate::ListingValidator`]'s job.

use std::io::Read;

use serde::{Deserialize, Serialize};

use propiq_core::{Listing, PriceSample, Result, SeasonalSample};

/// A complete market dataset. Every section is optional in the source
/// document; missing sections deserialize to empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Property listings.
    #[serde(default)]
    pub listings: Vec<Listing>,
    /// Per-city monthly price samples.
    #[serde(default)]
    pub price_history: Vec<PriceSample>,
    /// Twelve-month seasonal samples.
    #[serde(default)]
    pub seasonal: Vec<SeasonalSample>,
}

impl Dataset {
    /// Parse a dataset document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`propiq_core::Error::Json`] if the document is not
    /// valid JSON or does not match the dataset shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset document from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`propiq_core::Error::Json`] on a malformed document or
    /// [`propiq_core::Error::Io`] on a read failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Whether every section is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty() && self.price_history.is_empty() && self.seasonal.is_empty()
    }
}

/// Parse a JSON array of listings.
///
/// # Errors
///
/// Returns [`propiq_core::Error::Json`] on a malformed document.
pub fn listings_from_json(json: &str) -> Result<Vec<Listing>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of price samples.
///
/// # Errors
///
/// Returns [`propiq_core::Error::Json`] on a malformed document.
pub fn price_samples_from_json(json: &str) -> Result<Vec<PriceSample>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of seasonal samples.
///
/// # Errors
///
/// Returns [`propiq_core::Error::Json`] on a malformed document.
pub fn seasonal_samples_from_json(json: &str) -> Result<Vec<SeasonalSample>> {
    Ok(serde_json::from_str(json)?)
}
