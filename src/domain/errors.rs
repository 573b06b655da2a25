//! # Domain Errors
//!
//! Error types for domain-level validation failures.

use thiserror::Error;

/// Error type for domain validation failures.
///
/// Raised when constructing a value object from invalid input, before any
/// provider is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Parcel weight is not a positive, finite number.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// Parcel dimension is not a positive, finite number.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Country code is not a recognized two-letter code.
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),

    /// Currency code is not a three-letter alphabetic code.
    #[error("invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    /// Price is negative or does not fit in minor units.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A destination postcode is required for this route.
    #[error("destination postcode is required")]
    MissingPostcode,

    /// A parcel cannot be derived from an empty cart.
    #[error("cart is empty")]
    EmptyCart,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
