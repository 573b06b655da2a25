//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`CarrierId`]: string-based carrier identifier
//! - [`QuoteRequestId`]: UUID-based request identifier for log correlation
//!
//! ## Shipping Types
//!
//! - [`ParcelSpec`]: validated parcel weight and dimensions, optionally
//!   derived from a cart
//! - [`Destination`]: where a parcel is going, with the domestic vs
//!   international decision
//! - [`Money`]: integer minor-unit amounts with ceiling conversion from
//!   provider decimals

pub mod destination;
pub mod ids;
pub mod money;
pub mod parcel;

pub use destination::{CountryCode, Destination, OriginAddress};
pub use ids::{CarrierId, QuoteRequestId};
pub use money::{CurrencyCode, Money};
pub use parcel::{CartItem, ParcelSpec};
