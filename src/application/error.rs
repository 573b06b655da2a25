//! # Application Errors
//!
//! The error taxonomy a quote request can surface to its caller.
//!
//! Every failure blocks only the one checkout attempt it belongs to: nothing
//! here is retried, and the caller must present the error rather than fall
//! back to a zero-cost or estimated rate.
//!
//! # Examples
//!
//! ```
//! use shipquote::application::error::QuoteError;
//!
//! let err = QuoteError::weight_exceeded(36.0, 35.0);
//! assert!(err.is_client_error());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::carriers::error::CarrierError;
use thiserror::Error;

/// Error type for quote resolution.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The parcel is heavier than any supported carrier accepts.
    ///
    /// Raised before any network call is made.
    #[error("parcel weight {weight_kg} kg exceeds the {limit_kg} kg carrier limit")]
    WeightExceeded {
        /// The offending parcel weight.
        weight_kg: f64,
        /// The carrier-side hard limit.
        limit_kg: f64,
    },

    /// A provider call failed (non-2xx, transport failure, or malformed
    /// response).
    #[error("shipping provider error: {0}")]
    Provider(#[from] CarrierError),

    /// No usable rate was found after filtering.
    #[error("shipping unavailable: {0}")]
    ShippingUnavailable(String),

    /// The quote input failed domain validation.
    #[error("invalid quote input: {0}")]
    Domain(#[from] DomainError),
}

impl QuoteError {
    /// Creates a weight exceeded error.
    #[must_use]
    pub fn weight_exceeded(weight_kg: f64, limit_kg: f64) -> Self {
        Self::WeightExceeded {
            weight_kg,
            limit_kg,
        }
    }

    /// Creates a shipping unavailable error.
    #[must_use]
    pub fn shipping_unavailable(message: impl Into<String>) -> Self {
        Self::ShippingUnavailable(message.into())
    }

    /// Returns true if the request itself was at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::WeightExceeded { .. } | Self::Domain(_))
    }

    /// Returns true if a provider failed rather than the request.
    #[must_use]
    pub fn is_provider_failure(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    /// Returns the message to show the customer.
    ///
    /// Prefers the provider's own message when one was reported; provider
    /// transport details are not customer-facing.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(e) => e
                .provider_message()
                .map(ToString::to_string)
                .unwrap_or_else(|| "shipping provider is currently unavailable".to_string()),
            other => other.to_string(),
        }
    }
}

/// Result type for quote resolution.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_exceeded_is_client_error() {
        let err = QuoteError::weight_exceeded(36.0, 35.0);
        assert!(err.is_client_error());
        assert!(!err.is_provider_failure());
        assert!(err.to_string().contains("36"));
        assert!(err.to_string().contains("35"));
    }

    #[test]
    fn domain_error_is_client_error() {
        let err: QuoteError = DomainError::MissingPostcode.into();
        assert!(err.is_client_error());
    }

    #[test]
    fn carrier_error_is_provider_failure() {
        let err: QuoteError = CarrierError::timeout("timed out").into();
        assert!(err.is_provider_failure());
        assert!(!err.is_client_error());
    }

    #[test]
    fn user_message_prefers_provider_rejection() {
        let err: QuoteError = CarrierError::rejected("No services for this route").into();
        assert_eq!(err.user_message(), "No services for this route");
    }

    #[test]
    fn user_message_hides_transport_details() {
        let err: QuoteError = CarrierError::connection("connection refused (10.0.0.3:443)").into();
        assert_eq!(
            err.user_message(),
            "shipping provider is currently unavailable"
        );
    }

    #[test]
    fn shipping_unavailable_display() {
        let err = QuoteError::shipping_unavailable("no supported services");
        assert_eq!(
            err.to_string(),
            "shipping unavailable: no supported services"
        );
    }
}
