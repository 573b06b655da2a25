//! # Money
//!
//! Integer minor-unit currency amounts.
//!
//! Provider APIs return prices as decimal currency amounts. Checkout line
//! items want integer minor units (cents). The conversion lives here, in one
//! place, and always rounds up so the shop never undercharges against the
//! carrier rate: `12.005` becomes `1201`, never `1200`.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minor units per major currency unit (two-decimal currencies).
const MINOR_UNITS_PER_MAJOR: u32 = 100;

/// ISO-4217-style three-letter currency code.
///
/// # Examples
///
/// ```
/// use shipquote::domain::value_objects::CurrencyCode;
///
/// let aud = CurrencyCode::new("aud").unwrap();
/// assert_eq!(aud.as_str(), "AUD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Creates a currency code, normalizing to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCurrencyCode` if the code is not exactly
    /// three ASCII letters.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into().trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::InvalidCurrencyCode(code));
        }
        Ok(Self(code))
    }

    /// Australian dollars, the quote currency of every supported carrier.
    #[must_use]
    pub fn aud() -> Self {
        Self("AUD".to_string())
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative amount of money in integer minor units.
///
/// # Invariants
///
/// - The amount is always a non-negative integer in minor units.
/// - Conversion from a decimal provider price rounds up (ceiling).
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shipquote::domain::value_objects::{CurrencyCode, Money};
///
/// let price = Decimal::new(12005, 3); // 12.005
/// let money = Money::from_decimal(price, CurrencyCode::aud()).unwrap();
/// assert_eq!(money.minor_units(), 1201);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units (cents).
    minor_units: u64,
    /// Currency of the amount.
    currency: CurrencyCode,
}

impl Money {
    /// Creates a money amount from minor units.
    #[must_use]
    pub fn new(minor_units: u64, currency: CurrencyCode) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Converts a decimal major-unit amount to minor units, rounding up.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is negative or does
    /// not fit in a `u64` of minor units.
    pub fn from_decimal(amount: Decimal, currency: CurrencyCode) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::InvalidPrice(amount.to_string()));
        }
        let scaled = amount
            .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
            .ok_or_else(|| DomainError::InvalidPrice(amount.to_string()))?;
        let minor_units = scaled
            .ceil()
            .to_u64()
            .ok_or_else(|| DomainError::InvalidPrice(amount.to_string()))?;
        Ok(Self {
            minor_units,
            currency,
        })
    }

    /// Returns the amount in minor units.
    #[inline]
    #[must_use]
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.minor_units, self.currency)
    }
}
