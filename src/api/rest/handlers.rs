//! # REST Handlers
//!
//! Request/response DTOs and the handlers behind the REST routes.
//!
//! The quote endpoint mirrors the checkout form: flat parcel and destination
//! fields in, an ordered option list out. Failures map onto structured error
//! bodies; the checkout page shows the message and blocks submission, it
//! never substitutes an estimated rate.

use crate::application::error::QuoteError;
use crate::application::services::quote_resolver::ShippingQuoteResolver;
use crate::domain::entities::ShippingOption;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CountryCode, Destination, ParcelSpec};
use crate::infrastructure::carriers::error::CarrierError;
use crate::infrastructure::carriers::traits::{PostalCarrier, ShippingCountry};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The quote resolver.
    pub resolver: Arc<ShippingQuoteResolver>,
    /// Postal carrier backing the country list.
    pub postal: Arc<dyn PostalCarrier>,
}

/// Body of `POST /api/v1/shipping/quotes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
    /// Parcel weight in kilograms.
    pub weight: f64,
    /// Parcel length in centimetres.
    pub length: f64,
    /// Parcel width in centimetres.
    pub width: f64,
    /// Parcel height in centimetres.
    pub height: f64,
    /// Destination country code, or the checkout form's fallback literal.
    pub destination_country: String,
    /// Destination postcode.
    #[serde(default)]
    pub destination_postcode: Option<String>,
    /// Destination city.
    #[serde(default)]
    pub destination_city: Option<String>,
    /// Destination state or region.
    #[serde(default)]
    pub destination_state: Option<String>,
}

/// One shipping option in the quote response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOptionResponse {
    /// Customer-facing name of the option.
    pub display_name: String,
    /// Price in minor currency units.
    pub amount_minor_units: u64,
    /// Currency of the price.
    pub currency_code: String,
}

impl From<&ShippingOption> for ShippingOptionResponse {
    fn from(option: &ShippingOption) -> Self {
        Self {
            display_name: option.display_name().to_string(),
            amount_minor_units: option.amount().minor_units(),
            currency_code: option.amount().currency().as_str().to_string(),
        }
    }
}

/// One country in the country-list response.
#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    /// Two-letter country code.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl From<ShippingCountry> for CountryResponse {
    fn from(country: ShippingCountry) -> Self {
        Self {
            code: country.code,
            name: country.name,
        }
    }
}

/// Body of `GET /api/v1/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the service is up.
    pub status: &'static str,
}

/// Structured error body returned for every failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error kind.
    pub error: &'static str,
    /// Customer-facing message.
    pub message: String,
}

/// Error wrapper mapping application failures onto HTTP statuses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.kind,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(error: QuoteError) -> Self {
        let (status, kind) = match &error {
            QuoteError::Domain(_) => (StatusCode::BAD_REQUEST, "validation"),
            QuoteError::WeightExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "weight_exceeded")
            }
            QuoteError::ShippingUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "shipping_unavailable")
            }
            QuoteError::Provider(_) => (StatusCode::BAD_GATEWAY, "provider_error"),
        };
        Self {
            status,
            kind,
            message: error.user_message(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        QuoteError::from(error).into()
    }
}

impl From<CarrierError> for ApiError {
    fn from(error: CarrierError) -> Self {
        QuoteError::from(error).into()
    }
}

/// `POST /api/v1/shipping/quotes`
///
/// # Errors
///
/// Returns a structured error body; see [`ApiError`] for the status mapping.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuoteRequestBody>,
) -> Result<Json<Vec<ShippingOptionResponse>>, ApiError> {
    let parcel = ParcelSpec::new(body.weight, body.length, body.width, body.height)?;
    let mut destination = Destination::new(CountryCode::new(body.destination_country)?);
    if let Some(postcode) = body.destination_postcode.filter(|value| !value.is_empty()) {
        destination = destination.with_postcode(postcode);
    }
    if let Some(city) = body.destination_city.filter(|value| !value.is_empty()) {
        destination = destination.with_city(city);
    }
    if let Some(region) = body.destination_state.filter(|value| !value.is_empty()) {
        destination = destination.with_region(region);
    }

    let outcome = state.resolver.resolve(&parcel, &destination).await?;
    Ok(Json(
        outcome
            .options
            .iter()
            .map(ShippingOptionResponse::from)
            .collect(),
    ))
}

/// `GET /api/v1/shipping/countries`
///
/// # Errors
///
/// Returns a `provider_error` body if the carrier lookup fails.
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CountryResponse>>, ApiError> {
    let countries = state.postal.list_countries().await?;
    Ok(Json(countries.into_iter().map(CountryResponse::from).collect()))
}

/// `GET /api/v1/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
