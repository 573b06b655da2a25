//! # Interparcel Client
//!
//! Client for the Interparcel freight marketplace quote API.
//!
//! Quoting is a two-step flow: `/quote/availability` lists the services able
//! to carry the consignment, then `/quote/quote` prices one service at a
//! time. The availability response reports rejections in-band through an
//! `errorMessage` field rather than an HTTP status.

use crate::domain::value_objects::{CarrierId, CountryCode};
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::http_client::HttpClient;
use crate::infrastructure::carriers::traits::{
    FreightMarketplace, FreightQuote, FreightRequest, FreightServiceListing,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Path of the availability probe.
const AVAILABILITY_PATH: &str = "/quote/availability";

/// Path of the per-service quote lookup.
const QUOTE_PATH: &str = "/quote/quote";

/// Marketplace couriers this shop cannot hand parcels to.
const EXCLUDED_SERVICE_MARKERS: &[&str] = &["Hunter"];

/// Client for the Interparcel freight marketplace.
#[derive(Debug, Clone)]
pub struct InterparcelClient {
    /// Carrier identifier.
    carrier_id: CarrierId,
    /// Shared HTTP client.
    http: HttpClient,
    /// API base URL, without a trailing slash.
    base_url: String,
    /// Session identifier sent as a `PHPSESSID` cookie on quote calls.
    session_cookie: String,
}

impl InterparcelClient {
    /// Creates a client for the given base URL and session credential.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        session_cookie: impl Into<String>,
        timeout_ms: u64,
    ) -> CarrierResult<Self> {
        Ok(Self {
            carrier_id: CarrierId::new("interparcel"),
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_cookie: session_cookie.into(),
        })
    }

    /// Builds the shipment query parameters shared by both endpoints.
    fn shipment_params(request: &FreightRequest) -> Vec<(&'static str, String)> {
        let destination = &request.destination;
        let origin = &request.origin;
        let parcel = &request.parcel;
        vec![
            ("source", "booking".to_string()),
            ("coll_country", country_name(origin.country()).to_string()),
            ("coll_state", origin.region().to_string()),
            ("coll_city", origin.city().to_string()),
            ("coll_postcode", origin.postcode().to_string()),
            (
                "del_postcode",
                destination.postcode().unwrap_or_default().to_string(),
            ),
            (
                "del_city",
                destination.city().unwrap_or_default().to_string(),
            ),
            (
                "del_state",
                destination.region().unwrap_or_default().to_string(),
            ),
            (
                "del_country",
                country_name(destination.country()).to_string(),
            ),
            ("pkg[0][0]", parcel.weight_kg().to_string()),
            ("pkg[0][1]", parcel.length_cm().to_string()),
            ("pkg[0][2]", parcel.width_cm().to_string()),
            ("pkg[0][3]", parcel.height_cm().to_string()),
        ]
    }
}

#[async_trait]
impl FreightMarketplace for InterparcelClient {
    fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    async fn available_services(
        &self,
        request: &FreightRequest,
    ) -> CarrierResult<Vec<FreightServiceListing>> {
        let url = format!("{}{}", self.base_url, AVAILABILITY_PATH);
        let mut params = Self::shipment_params(request);
        params.push(("type", "parcel".to_string()));

        let response: AvailabilityResponse = self.http.get_with_params(&url, &params).await?;
        if !response.error_message.is_empty() {
            return Err(CarrierError::rejected(response.error_message));
        }

        Ok(response
            .services
            .into_iter()
            .filter(|service| !is_excluded(&service.service))
            .map(|service| FreightServiceListing {
                id: service.id,
                name: service.service,
            })
            .collect())
    }

    async fn quote_service(
        &self,
        request: &FreightRequest,
        service_id: &str,
    ) -> CarrierResult<FreightQuote> {
        let url = format!("{}{}", self.base_url, QUOTE_PATH);
        let mut params = Self::shipment_params(request);
        params.push(("service", service_id.to_string()));

        let mut headers = reqwest::header::HeaderMap::new();
        let cookie = format!("PHPSESSID={}", self.session_cookie);
        let value = reqwest::header::HeaderValue::from_str(&cookie)
            .map_err(|_| CarrierError::internal("session cookie is not a valid header value"))?;
        headers.insert(reqwest::header::COOKIE, value);

        let response: QuoteResponse = self
            .http
            .get_with_params_and_headers(&url, &params, headers)
            .await?;
        response
            .services
            .into_iter()
            .next()
            .ok_or_else(|| {
                CarrierError::protocol(format!(
                    "quote response for service {} contained no services",
                    service_id
                ))
            })?
            .into_freight_quote()
    }
}

/// Maps a country code to the full-name form the marketplace expects.
fn country_name(country: &CountryCode) -> &str {
    match country.as_str() {
        "AU" => "Australia",
        other => other,
    }
}

/// Returns true for services this shop cannot use.
fn is_excluded(service_name: &str) -> bool {
    EXCLUDED_SERVICE_MARKERS
        .iter()
        .any(|marker| service_name.contains(marker))
}

/// Wire format of the availability probe.
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    #[serde(rename = "errorMessage", default)]
    error_message: String,
    #[serde(default)]
    services: Vec<ListedService>,
}

#[derive(Debug, Deserialize)]
struct ListedService {
    id: String,
    service: String,
}

/// Wire format of the per-service quote.
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    services: Vec<QuotedService>,
}

#[derive(Debug, Deserialize)]
struct QuotedService {
    carrier: String,
    name: String,
    #[serde(rename = "sellPrice")]
    sell_price: f64,
}

impl QuotedService {
    /// Converts the wire quote into a [`FreightQuote`].
    fn into_freight_quote(self) -> CarrierResult<FreightQuote> {
        let sell_price = Decimal::from_f64_retain(self.sell_price).ok_or_else(|| {
            CarrierError::protocol(format!("unrepresentable sell price {}", self.sell_price))
        })?;
        Ok(FreightQuote {
            carrier: self.carrier,
            service_name: self.name,
            sell_price,
        })
    }
}
