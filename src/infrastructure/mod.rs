//! # Infrastructure Layer
//!
//! Carrier API clients and the shared HTTP plumbing behind them.

pub mod carriers;
