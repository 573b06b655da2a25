//! # Configuration
//!
//! Layered settings for the quote service: an optional TOML file, then
//! `SHIPQUOTE__`-prefixed environment variables (double underscore between
//! levels, e.g. `SHIPQUOTE__AUSPOST__API_KEY`). Defaults cover everything
//! except the AusPost API key.

use crate::application::services::quote_resolver::ResolverConfig;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CountryCode, CurrencyCode, OriginAddress};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Default bind address of the quote service.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default AusPost Postage Assessment API base URL.
const DEFAULT_AUSPOST_BASE_URL: &str = "https://digitalapi.auspost.com.au";

/// Default Interparcel API base URL.
const DEFAULT_INTERPARCEL_BASE_URL: &str = "https://au.interparcel.com/api";

/// Default Interparcel session cookie value.
const DEFAULT_INTERPARCEL_SESSION: &str = "f";

/// Default per-provider-call timeout in milliseconds.
const DEFAULT_PER_CALL_TIMEOUT_MS: u64 = 5000;

/// Top-level settings for the quote service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// AusPost client settings.
    pub auspost: AusPostSettings,
    /// Interparcel client settings.
    pub interparcel: InterparcelSettings,
    /// Seller ship-from address.
    pub origin: OriginSettings,
    /// Resolver policy knobs.
    pub resolver: ResolverSettings,
}

impl Settings {
    /// Loads settings from an optional file and the environment.
    ///
    /// With no explicit path, a `shipquote.toml` next to the working
    /// directory is read when present. Environment variables override the
    /// file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read, a value cannot be
    /// deserialized, or the AusPost API key is missing.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = match config_path {
            Some(path) => Config::builder().add_source(File::from(path)),
            None => Config::builder().add_source(File::with_name("shipquote").required(false)),
        };
        let settings: Self = builder
            .add_source(
                Environment::with_prefix("SHIPQUOTE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks for values that have no usable default.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.auspost.api_key.is_empty() {
            return Err(ConfigError::Message(
                "auspost.api_key must be set (SHIPQUOTE__AUSPOST__API_KEY)".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the service listens on.
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

/// AusPost client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AusPostSettings {
    /// API base URL.
    pub base_url: String,
    /// API key sent as the `AUTH-KEY` header.
    pub api_key: String,
}

impl Default for AusPostSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUSPOST_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

/// Interparcel client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterparcelSettings {
    /// API base URL.
    pub base_url: String,
    /// Session identifier sent as a `PHPSESSID` cookie on quote calls.
    pub session_cookie: String,
}

impl Default for InterparcelSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INTERPARCEL_BASE_URL.to_string(),
            session_cookie: DEFAULT_INTERPARCEL_SESSION.to_string(),
        }
    }
}

/// Seller ship-from address settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OriginSettings {
    /// Origin postcode.
    pub postcode: String,
    /// Origin city.
    pub city: String,
    /// Origin state or region.
    pub state: String,
    /// Origin country code.
    pub country: String,
}

impl Default for OriginSettings {
    fn default() -> Self {
        Self {
            postcode: "3180".to_string(),
            city: "Knoxfield".to_string(),
            state: "VIC".to_string(),
            country: "AU".to_string(),
        }
    }
}

impl OriginSettings {
    /// Converts into the domain origin address.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the country code is invalid.
    pub fn to_origin_address(&self) -> DomainResult<OriginAddress> {
        Ok(OriginAddress::new(
            &self.postcode,
            &self.city,
            &self.state,
            CountryCode::new(&self.country)?,
        ))
    }
}

/// Resolver policy settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// The seller's home country, driving the domestic branch.
    pub home_country: String,
    /// Weight at and above which parcels route to heavy freight, in kg.
    pub heavy_parcel_threshold_kg: f64,
    /// Provider-side hard weight limit for heavy freight, in kg.
    pub max_freight_weight_kg: f64,
    /// Maximum number of heavy-freight options returned.
    pub freight_option_cap: usize,
    /// Timeout for each provider call, in milliseconds.
    pub per_call_timeout_ms: u64,
    /// International service names offered to customers.
    pub international_service_names: Vec<String>,
    /// Currency every provider quotes in.
    pub quote_currency: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        let defaults = ResolverConfig::default();
        Self {
            home_country: "AU".to_string(),
            heavy_parcel_threshold_kg: defaults.heavy_parcel_threshold_kg,
            max_freight_weight_kg: defaults.max_freight_weight_kg,
            freight_option_cap: defaults.freight_option_cap,
            per_call_timeout_ms: DEFAULT_PER_CALL_TIMEOUT_MS,
            international_service_names: defaults.international_service_names,
            quote_currency: "AUD".to_string(),
        }
    }
}

impl ResolverSettings {
    /// Converts into the resolver configuration.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the quote currency is invalid.
    pub fn to_resolver_config(&self) -> DomainResult<ResolverConfig> {
        Ok(ResolverConfig {
            heavy_parcel_threshold_kg: self.heavy_parcel_threshold_kg,
            max_freight_weight_kg: self.max_freight_weight_kg,
            freight_option_cap: self.freight_option_cap,
            per_call_timeout_ms: self.per_call_timeout_ms,
            international_service_names: self.international_service_names.clone(),
            quote_currency: CurrencyCode::new(&self.quote_currency)?,
        })
    }

    /// Returns the home country as a domain value.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the configured code is invalid.
    pub fn home_country(&self) -> DomainResult<CountryCode> {
        CountryCode::new(&self.home_country)
    }
}
