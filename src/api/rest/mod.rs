//! # REST API
//!
//! The axum surface the checkout page talks to.
//!
//! Three endpoints: quote a parcel, list the destination countries for the
//! address picker, and a liveness probe. Quote failures come back as
//! structured error bodies the page shows to the customer before blocking
//! submission.
//!
//! | Method | Path | Purpose |
//! |---|---|---|
//! | `POST` | `/api/v1/shipping/quotes` | Quote a parcel and destination |
//! | `GET` | `/api/v1/shipping/countries` | Destination country list |
//! | `GET` | `/api/v1/health` | Liveness |
//!
//! Wire the router up in a binary:
//!
//! ```ignore
//! let state = Arc::new(AppState { resolver: Arc::new(resolver), postal });
//! let router = shipquote::api::rest::create_router(state);
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, CountryResponse, ErrorResponse, HealthResponse, QuoteRequestBody,
    ShippingOptionResponse,
};
pub use routes::create_router;
