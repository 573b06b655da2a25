//! # Entities
//!
//! The normalized output of a quote request.

pub mod shipping_option;

pub use shipping_option::ShippingOption;
