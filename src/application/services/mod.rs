//! # Application Services
//!
//! Use-case orchestration over the carrier ports.

pub mod quote_resolver;

pub use quote_resolver::{ResolutionOutcome, ResolverConfig, RouteBranch, ShippingQuoteResolver};
