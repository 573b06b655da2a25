//! # Identifiers
//!
//! Identity types for carriers and quote requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// String-based identifier for a shipping carrier or marketplace.
///
/// # Examples
///
/// ```
/// use shipquote::domain::value_objects::CarrierId;
///
/// let id = CarrierId::new("auspost");
/// assert_eq!(id.as_str(), "auspost");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierId(String);

impl CarrierId {
    /// Creates a carrier identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarrierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UUID-based identifier correlating the log lines of one quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteRequestId(Uuid);

impl QuoteRequestId {
    /// Creates a new random request identifier.
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuoteRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
