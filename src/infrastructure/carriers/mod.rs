//! # Carrier Integrations
//!
//! Clients for the shipping-rate providers, behind the
//! [`PostalCarrier`](traits::PostalCarrier) and
//! [`FreightMarketplace`](traits::FreightMarketplace) ports so the resolver
//! and its tests never depend on a concrete HTTP client.

pub mod auspost;
pub mod error;
pub mod http_client;
pub mod interparcel;
pub mod traits;

pub use auspost::AusPostClient;
pub use error::{CarrierError, CarrierResult};
pub use interparcel::InterparcelClient;
