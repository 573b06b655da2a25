//! # Carrier Ports
//!
//! Port definitions for shipping-rate providers.
//!
//! The resolver talks to providers exclusively through these traits, so
//! tests can substitute stub implementations returning fixture data.
//!
//! # Examples
//!
//! ```ignore
//! use shipquote::infrastructure::carriers::traits::{FreightMarketplace, PostalCarrier};
//!
//! #[async_trait::async_trait]
//! impl PostalCarrier for MyStubCarrier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::value_objects::{CarrierId, CountryCode, Destination, OriginAddress, ParcelSpec};
use crate::infrastructure::carriers::error::CarrierResult;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One service offered by a postal carrier, with its raw decimal price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalService {
    /// Carrier service code (e.g. `AUS_PARCEL_REGULAR`).
    pub code: String,
    /// Customer-facing service name (e.g. `Standard`).
    pub name: String,
    /// Price as a decimal major-unit amount.
    pub price: Decimal,
}

/// A destination country as reported by the postal carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCountry {
    /// Two-letter country code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A freight service surfaced by the marketplace availability probe.
///
/// Listings carry no price; each one needs a follow-up quote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreightServiceListing {
    /// Marketplace service identifier, passed back to the quote endpoint.
    pub id: String,
    /// Service name as listed by the marketplace.
    pub name: String,
}

/// A priced freight quote for one marketplace service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreightQuote {
    /// Carrier fulfilling the service.
    pub carrier: String,
    /// Service name.
    pub service_name: String,
    /// Sell price as a decimal major-unit amount.
    pub sell_price: Decimal,
}

/// Everything a freight marketplace needs to price a consignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreightRequest {
    /// The parcel being shipped.
    pub parcel: ParcelSpec,
    /// The seller's ship-from address.
    pub origin: OriginAddress,
    /// Where the parcel is going.
    pub destination: Destination,
}

/// Port for a postal carrier's rate-lookup API.
///
/// # Error Handling
///
/// Methods return `CarrierResult<T>`. Implementations map provider-specific
/// failures onto [`CarrierError`](crate::infrastructure::carriers::error::CarrierError)
/// variants.
#[async_trait]
pub trait PostalCarrier: Send + Sync + fmt::Debug {
    /// Returns the carrier ID.
    fn carrier_id(&self) -> &CarrierId;

    /// Looks up domestic services for a parcel between two postcodes.
    ///
    /// # Errors
    ///
    /// - `CarrierError::Timeout` - request timed out
    /// - `CarrierError::Connection` - transport failure or carrier 5xx
    /// - `CarrierError::Protocol` - malformed response
    async fn domestic_services(
        &self,
        parcel: &ParcelSpec,
        origin: &OriginAddress,
        destination_postcode: &str,
    ) -> CarrierResult<Vec<PostalService>>;

    /// Looks up international services for a weight and destination country.
    ///
    /// # Errors
    ///
    /// Same classification as [`PostalCarrier::domestic_services`].
    async fn international_services(
        &self,
        country: &CountryCode,
        weight_kg: f64,
    ) -> CarrierResult<Vec<PostalService>>;

    /// Lists the countries the carrier ships to.
    ///
    /// # Errors
    ///
    /// Same classification as [`PostalCarrier::domestic_services`].
    async fn list_countries(&self) -> CarrierResult<Vec<ShippingCountry>>;
}

/// Port for a freight marketplace's two-step quote API.
///
/// The marketplace is asked once which services can carry the consignment,
/// then once per service for a binding price.
#[async_trait]
pub trait FreightMarketplace: Send + Sync + fmt::Debug {
    /// Returns the carrier ID.
    fn carrier_id(&self) -> &CarrierId;

    /// Probes which services are available for the consignment.
    ///
    /// # Errors
    ///
    /// - `CarrierError::Rejected` - the marketplace declined the request,
    ///   with its own message
    /// - `CarrierError::Timeout`/`Connection`/`Protocol` - as for postal
    ///   lookups
    async fn available_services(
        &self,
        request: &FreightRequest,
    ) -> CarrierResult<Vec<FreightServiceListing>>;

    /// Fetches a binding quote for one listed service.
    ///
    /// # Errors
    ///
    /// Same classification as [`FreightMarketplace::available_services`].
    async fn quote_service(
        &self,
        request: &FreightRequest,
        service_id: &str,
    ) -> CarrierResult<FreightQuote>;
}
