//! # Shipping Option
//!
//! A carrier-agnostic shipping option, ready to be used as a checkout line
//! item. Options live for a single request/response cycle; nothing here is
//! persisted.

use crate::domain::value_objects::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One normalized shipping option offered to the customer.
///
/// # Examples
///
/// ```
/// use shipquote::domain::entities::ShippingOption;
/// use shipquote::domain::value_objects::{CurrencyCode, Money};
///
/// let option = ShippingOption::new("AusPost Regular", Money::new(1060, CurrencyCode::aud()));
/// assert_eq!(option.display_name(), "AusPost Regular");
/// assert_eq!(option.amount().minor_units(), 1060);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Customer-facing name of the option.
    display_name: String,
    /// Price of the option.
    amount: Money,
}

impl ShippingOption {
    /// Creates a shipping option.
    #[must_use]
    pub fn new(display_name: impl Into<String>, amount: Money) -> Self {
        Self {
            display_name: display_name.into(),
            amount,
        }
    }

    /// Returns the customer-facing name.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the price.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> &Money {
        &self.amount
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.amount)
    }
}
