//! # AusPost Client
//!
//! Client for the AusPost Postage Assessment REST API, covering domestic and
//! international parcel services plus the destination country list.
//!
//! Prices arrive as decimal strings (`"10.60"`); they are parsed into
//! [`Decimal`] here and converted to minor units later, in the domain layer.

use crate::domain::value_objects::{CarrierId, CountryCode, OriginAddress, ParcelSpec};
use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::http_client::HttpClient;
use crate::infrastructure::carriers::traits::{PostalCarrier, PostalService, ShippingCountry};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Path of the domestic parcel service lookup.
const DOMESTIC_SERVICE_PATH: &str = "/postage/parcel/domestic/service.json";

/// Path of the international parcel service lookup.
const INTERNATIONAL_SERVICE_PATH: &str = "/postage/parcel/international/service.json";

/// Path of the destination country list.
const COUNTRY_PATH: &str = "/postage/country.json";

/// Header carrying the API key.
const AUTH_HEADER: &str = "AUTH-KEY";

/// Client for the AusPost Postage Assessment API.
#[derive(Debug, Clone)]
pub struct AusPostClient {
    /// Carrier identifier.
    carrier_id: CarrierId,
    /// Shared HTTP client carrying the `AUTH-KEY` header.
    http: HttpClient,
    /// API base URL, without a trailing slash.
    base_url: String,
}

impl AusPostClient {
    /// Creates a client for the given base URL and API key.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Authentication` if the API key is not a valid
    /// header value, or `CarrierError::Internal` if the HTTP client cannot
    /// be built.
    pub fn new(base_url: impl Into<String>, api_key: &str, timeout_ms: u64) -> CarrierResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut value = reqwest::header::HeaderValue::from_str(api_key)
            .map_err(|_| CarrierError::authentication("API key is not a valid header value"))?;
        value.set_sensitive(true);
        headers.insert(AUTH_HEADER, value);

        Ok(Self {
            carrier_id: CarrierId::new("auspost"),
            http: HttpClient::with_default_headers(timeout_ms, headers)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PostalCarrier for AusPostClient {
    fn carrier_id(&self) -> &CarrierId {
        &self.carrier_id
    }

    async fn domestic_services(
        &self,
        parcel: &ParcelSpec,
        origin: &OriginAddress,
        destination_postcode: &str,
    ) -> CarrierResult<Vec<PostalService>> {
        let url = format!("{}{}", self.base_url, DOMESTIC_SERVICE_PATH);
        let params = [
            ("length", parcel.length_cm().to_string()),
            ("width", parcel.width_cm().to_string()),
            ("height", parcel.height_cm().to_string()),
            ("weight", parcel.weight_kg().to_string()),
            ("from_postcode", origin.postcode().to_string()),
            ("to_postcode", destination_postcode.to_string()),
        ];
        let envelope: ServiceListEnvelope = self.http.get_with_params(&url, &params).await?;
        envelope
            .services
            .service
            .into_iter()
            .map(ServiceEntry::into_postal_service)
            .collect()
    }

    async fn international_services(
        &self,
        country: &CountryCode,
        weight_kg: f64,
    ) -> CarrierResult<Vec<PostalService>> {
        let url = format!("{}{}", self.base_url, INTERNATIONAL_SERVICE_PATH);
        let params = [
            ("country_code", country.as_str().to_string()),
            ("weight", weight_kg.to_string()),
        ];
        let envelope: ServiceListEnvelope = self.http.get_with_params(&url, &params).await?;
        envelope
            .services
            .service
            .into_iter()
            .map(ServiceEntry::into_postal_service)
            .collect()
    }

    async fn list_countries(&self) -> CarrierResult<Vec<ShippingCountry>> {
        let url = format!("{}{}", self.base_url, COUNTRY_PATH);
        let envelope: CountryListEnvelope = self.http.get(&url).await?;
        Ok(envelope
            .countries
            .country
            .into_iter()
            .map(|entry| ShippingCountry {
                code: entry.code,
                name: entry.name,
            })
            .collect())
    }
}

/// Wire envelope of both service lookups.
#[derive(Debug, Deserialize)]
struct ServiceListEnvelope {
    services: ServiceList,
}

#[derive(Debug, Deserialize)]
struct ServiceList {
    #[serde(default)]
    service: Vec<ServiceEntry>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    code: String,
    name: String,
    price: String,
}

impl ServiceEntry {
    /// Parses the decimal price string into a [`PostalService`].
    fn into_postal_service(self) -> CarrierResult<PostalService> {
        let price = Decimal::from_str(&self.price).map_err(|e| {
            CarrierError::protocol(format!("unparseable price {:?}: {}", self.price, e))
        })?;
        Ok(PostalService {
            code: self.code,
            name: self.name,
            price,
        })
    }
}

/// Wire envelope of the country list.
#[derive(Debug, Deserialize)]
struct CountryListEnvelope {
    countries: CountryList,
}

#[derive(Debug, Deserialize)]
struct CountryList {
    #[serde(default)]
    country: Vec<CountryEntry>,
}

#[derive(Debug, Deserialize)]
struct CountryEntry {
    code: String,
    name: String,
}
