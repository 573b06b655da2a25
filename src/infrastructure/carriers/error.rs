//! # Carrier Errors
//!
//! Failure taxonomy for talking to shipping-rate providers.
//!
//! A carrier call can fail in transit (timeout, unreachable host), at the
//! gate (credential rejected, throttled), or in-band: the provider answers
//! 200 but declines the request with its own message. That last case is
//! [`CarrierError::Rejected`], which preserves the provider's wording so the
//! checkout page can show it verbatim.
//!
//! # Examples
//!
//! ```
//! use shipquote::infrastructure::carriers::error::CarrierError;
//!
//! assert!(CarrierError::timeout("no response").is_retryable());
//! assert!(!CarrierError::authentication("bad API key").is_retryable());
//! ```

use thiserror::Error;

/// Error raised by a carrier client.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// No response before the client deadline.
    #[error("provider timed out: {0}")]
    Timeout(String),

    /// The provider could not be reached, or answered with a server error.
    #[error("provider unreachable: {0}")]
    Connection(String),

    /// The provider refused our credential.
    #[error("provider authentication failed: {0}")]
    Authentication(String),

    /// The provider throttled the request.
    #[error("provider throttled the request: {0}")]
    RateLimited(String),

    /// The provider could not make sense of the request parameters.
    #[error("provider rejected request parameters: {0}")]
    InvalidRequest(String),

    /// The provider processed the request but declined to quote it.
    ///
    /// The payload is the provider's own message, unedited.
    #[error("{0}")]
    Rejected(String),

    /// The response did not match the provider's documented wire format.
    #[error("malformed provider response: {0}")]
    Protocol(String),

    /// A failure on this side of the call.
    #[error("carrier client error: {0}")]
    Internal(String),
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a timeout error noting the deadline that was missed.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout(format!("{} ({} ms deadline)", message.into(), timeout_ms))
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a rate-limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited(message.into())
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a rejection from the provider's own message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if a retry of the same request could plausibly succeed.
    ///
    /// The resolver never retries; the classification exists for callers and
    /// for log triage.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::RateLimited(_)
        )
    }

    /// Returns true if the request, not the provider, was at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::Authentication(_))
    }

    /// Returns the provider's own message for in-band rejections.
    #[must_use]
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Rejected(message) => Some(message),
            _ => None,
        }
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
