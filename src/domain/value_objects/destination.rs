//! # Destination
//!
//! Where a parcel is going, and where it ships from.
//!
//! The destination country drives the domestic vs international routing
//! decision: a destination is domestic when its country equals the seller's
//! home country.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-letter country code, normalized to uppercase.
///
/// The checkout form sends the literal `AUSTRALIA` when no country has been
/// picked yet; that alias normalizes to `AU` so the fallback routes domestic.
///
/// # Examples
///
/// ```
/// use shipquote::domain::value_objects::CountryCode;
///
/// assert_eq!(CountryCode::new("au").unwrap().as_str(), "AU");
/// assert_eq!(CountryCode::new("AUSTRALIA").unwrap().as_str(), "AU");
/// assert!(CountryCode::new("Narnia").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Creates a country code, normalizing case and known aliases.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` if the value is not two
    /// ASCII letters after normalization.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into().trim().to_ascii_uppercase();
        let code = match code.as_str() {
            "AUSTRALIA" => "AU".to_string(),
            _ => code,
        };
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::InvalidCountryCode(code));
        }
        Ok(Self(code))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a parcel is being shipped to.
///
/// Postcode, city and region are optional: international rate lookups only
/// need the country, while domestic and freight lookups need the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Destination country.
    country: CountryCode,
    /// Destination postcode, when known.
    postcode: Option<String>,
    /// Destination city, when known.
    city: Option<String>,
    /// Destination state or region, when known.
    region: Option<String>,
}

impl Destination {
    /// Creates a destination with only a country.
    #[must_use]
    pub fn new(country: CountryCode) -> Self {
        Self {
            country,
            postcode: None,
            city: None,
            region: None,
        }
    }

    /// Sets the postcode.
    #[must_use]
    pub fn with_postcode(mut self, postcode: impl Into<String>) -> Self {
        self.postcode = Some(postcode.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the state or region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Returns the destination country.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Returns the postcode, if known.
    #[inline]
    #[must_use]
    pub fn postcode(&self) -> Option<&str> {
        self.postcode.as_deref()
    }

    /// Returns the city, if known.
    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the state or region, if known.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns true when the destination country equals the home country.
    #[must_use]
    pub fn is_domestic(&self, home: &CountryCode) -> bool {
        self.country == *home
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.country)?;
        if let Some(postcode) = &self.postcode {
            write!(f, " {}", postcode)?;
        }
        Ok(())
    }
}

/// The seller's ship-from address, supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginAddress {
    /// Origin postcode.
    postcode: String,
    /// Origin city.
    city: String,
    /// Origin state or region.
    region: String,
    /// Origin country.
    country: CountryCode,
}

impl OriginAddress {
    /// Creates an origin address.
    #[must_use]
    pub fn new(
        postcode: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        country: CountryCode,
    ) -> Self {
        Self {
            postcode: postcode.into(),
            city: city.into(),
            region: region.into(),
            country,
        }
    }

    /// Returns the origin postcode.
    #[inline]
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Returns the origin city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the origin state or region.
    #[inline]
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the origin country.
    #[inline]
    #[must_use]
    pub fn country(&self) -> &CountryCode {
        &self.country
    }
}
