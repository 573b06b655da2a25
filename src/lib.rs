//! # shipquote
//!
//! Multi-carrier shipping rate quote engine for storefront checkout flows.
//!
//! Given a parcel (weight and dimensions) and a destination, the
//! [`ShippingQuoteResolver`](application::services::quote_resolver::ShippingQuoteResolver)
//! selects one of three shipping-rate providers, calls that provider's quote
//! endpoint(s), and returns a normalized, ordered list of
//! [`ShippingOption`](domain::entities::shipping_option::ShippingOption)s
//! priced in integer minor currency units.
//!
//! # Architecture
//!
//! - [`domain`]: validated value objects (parcels, destinations, money) and
//!   the normalized shipping-option output.
//! - [`application`]: the quote resolver with its routing policy, concurrent
//!   heavy-freight fan-out, and error taxonomy.
//! - [`infrastructure`]: carrier clients behind the
//!   [`PostalCarrier`](infrastructure::carriers::traits::PostalCarrier) and
//!   [`FreightMarketplace`](infrastructure::carriers::traits::FreightMarketplace)
//!   ports, plus the shared HTTP client.
//! - [`api`]: the axum REST surface the checkout page calls.
//! - [`config`]: layered settings (file + environment).
//!
//! # Example
//!
//! ```ignore
//! use shipquote::application::services::quote_resolver::{ResolverConfig, ShippingQuoteResolver};
//! use shipquote::domain::value_objects::{CountryCode, Destination, ParcelSpec};
//! use std::sync::Arc;
//!
//! let resolver = ShippingQuoteResolver::new(
//!     postal_client,
//!     freight_client,
//!     origin,
//!     CountryCode::new("AU")?,
//!     ResolverConfig::default(),
//! );
//!
//! let parcel = ParcelSpec::new(5.0, 40.0, 30.0, 20.0)?;
//! let destination = Destination::new(CountryCode::new("AU")?).with_postcode("3000");
//! let outcome = resolver.resolve(&parcel, &destination).await?;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
