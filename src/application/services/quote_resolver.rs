//! # Shipping Quote Resolver
//!
//! Routes a quote request to the right provider and normalizes the result.
//!
//! This module provides the [`ShippingQuoteResolver`], which applies the
//! selection policy (heavy freight above the weight threshold, otherwise
//! domestic or international postal rates), performs the provider calls, and
//! returns an ordered list of normalized shipping options.

use crate::application::error::{QuoteError, QuoteResult};
use crate::domain::entities::ShippingOption;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    CountryCode, CurrencyCode, Destination, Money, OriginAddress, ParcelSpec, QuoteRequestId,
};
use crate::infrastructure::carriers::traits::{
    FreightMarketplace, FreightRequest, PostalCarrier, PostalService,
};
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Service code of the domestic regular option.
const DOMESTIC_REGULAR_CODE: &str = "AUS_PARCEL_REGULAR";

/// Service code of the domestic express option.
const DOMESTIC_EXPRESS_CODE: &str = "AUS_PARCEL_EXPRESS";

/// Display name of the domestic regular option.
const DOMESTIC_REGULAR_NAME: &str = "AusPost Regular";

/// Display name of the domestic express option.
const DOMESTIC_EXPRESS_NAME: &str = "AusPost Express";

/// Configuration for quote resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Weight at and above which parcels route to heavy freight, in kg.
    pub heavy_parcel_threshold_kg: f64,
    /// Provider-side hard weight limit for heavy freight, in kg.
    pub max_freight_weight_kg: f64,
    /// Maximum number of heavy-freight options returned.
    pub freight_option_cap: usize,
    /// Timeout for each concurrent freight quote call, in milliseconds.
    pub per_call_timeout_ms: u64,
    /// International service names offered to customers.
    pub international_service_names: Vec<String>,
    /// Currency every provider quotes in.
    pub quote_currency: CurrencyCode,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            heavy_parcel_threshold_kg: 20.0,
            max_freight_weight_kg: 35.0,
            freight_option_cap: 4,
            per_call_timeout_ms: 5000,
            international_service_names: vec!["Standard".to_string(), "Express".to_string()],
            quote_currency: CurrencyCode::aud(),
        }
    }
}

impl ResolverConfig {
    /// Sets the heavy-freight routing threshold.
    #[must_use]
    pub fn with_heavy_parcel_threshold(mut self, threshold_kg: f64) -> Self {
        self.heavy_parcel_threshold_kg = threshold_kg;
        self
    }

    /// Sets the heavy-freight hard weight limit.
    #[must_use]
    pub fn with_max_freight_weight(mut self, limit_kg: f64) -> Self {
        self.max_freight_weight_kg = limit_kg;
        self
    }

    /// Sets the heavy-freight option cap.
    #[must_use]
    pub fn with_freight_option_cap(mut self, cap: usize) -> Self {
        self.freight_option_cap = cap;
        self
    }

    /// Sets the per-call timeout.
    #[must_use]
    pub fn with_per_call_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_call_timeout_ms = timeout_ms;
        self
    }
}

/// Which provider branch handled a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteBranch {
    /// Domestic postal rates.
    Domestic,
    /// International postal rates.
    International,
    /// Heavy-freight marketplace.
    HeavyFreight,
}

impl fmt::Display for RouteBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domestic => write!(f, "domestic"),
            Self::International => write!(f, "international"),
            Self::HeavyFreight => write!(f, "heavy-freight"),
        }
    }
}

/// Result of quote resolution.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    /// Normalized options in provider order (never empty).
    pub options: Vec<ShippingOption>,
    /// The branch that produced the options.
    pub route: RouteBranch,
    /// Number of services the provider surfaced.
    pub services_seen: usize,
    /// Number of services dropped by filtering, failures, or the cap.
    pub services_omitted: usize,
}

impl ResolutionOutcome {
    /// Returns the cheapest option, if any.
    #[must_use]
    pub fn cheapest_option(&self) -> Option<&ShippingOption> {
        self.options
            .iter()
            .min_by_key(|option| option.amount().minor_units())
    }
}

/// Resolves shipping quotes by routing each request to one provider.
///
/// # Selection policy
///
/// Evaluated in order, first match wins:
///
/// 1. Parcels at or above the heavy threshold go to the freight marketplace,
///    regardless of destination; above the hard limit the request is
///    rejected before any network call.
/// 2. International destinations go to the international postal lookup,
///    filtered to the configured service names.
/// 3. Everything else goes to the domestic postal lookup, which must yield
///    both the regular and express services.
#[derive(Debug)]
pub struct ShippingQuoteResolver {
    postal: Arc<dyn PostalCarrier>,
    freight: Arc<dyn FreightMarketplace>,
    origin: OriginAddress,
    home_country: CountryCode,
    config: ResolverConfig,
}

impl ShippingQuoteResolver {
    /// Creates a new resolver.
    #[must_use]
    pub fn new(
        postal: Arc<dyn PostalCarrier>,
        freight: Arc<dyn FreightMarketplace>,
        origin: OriginAddress,
        home_country: CountryCode,
        config: ResolverConfig,
    ) -> Self {
        Self {
            postal,
            freight,
            origin,
            home_country,
            config,
        }
    }

    /// Creates a new resolver with default configuration.
    #[must_use]
    pub fn with_defaults(
        postal: Arc<dyn PostalCarrier>,
        freight: Arc<dyn FreightMarketplace>,
        origin: OriginAddress,
        home_country: CountryCode,
    ) -> Self {
        Self::new(postal, freight, origin, home_country, ResolverConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves shipping options for a parcel and destination.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::WeightExceeded`] - parcel is over the hard limit;
    ///   raised before any network call
    /// - [`QuoteError::Provider`] - the selected provider failed
    /// - [`QuoteError::ShippingUnavailable`] - no usable rate after
    ///   filtering
    /// - [`QuoteError::Domain`] - the request is missing required input
    pub async fn resolve(
        &self,
        parcel: &ParcelSpec,
        destination: &Destination,
    ) -> QuoteResult<ResolutionOutcome> {
        let request_id = QuoteRequestId::new_v4();
        let weight_kg = parcel.weight_kg();

        if weight_kg >= self.config.heavy_parcel_threshold_kg {
            if weight_kg > self.config.max_freight_weight_kg {
                return Err(QuoteError::weight_exceeded(
                    weight_kg,
                    self.config.max_freight_weight_kg,
                ));
            }
            tracing::debug!(%request_id, %parcel, %destination, "routing to heavy freight");
            self.resolve_heavy_freight(parcel, destination).await
        } else if !destination.is_domestic(&self.home_country) {
            tracing::debug!(%request_id, %parcel, %destination, "routing to international postal");
            self.resolve_international(parcel, destination).await
        } else {
            tracing::debug!(%request_id, %parcel, %destination, "routing to domestic postal");
            self.resolve_domestic(parcel, destination).await
        }
    }

    /// Domestic branch: exactly two fixed options or failure.
    async fn resolve_domestic(
        &self,
        parcel: &ParcelSpec,
        destination: &Destination,
    ) -> QuoteResult<ResolutionOutcome> {
        let postcode = destination
            .postcode()
            .filter(|postcode| !postcode.is_empty())
            .ok_or(DomainError::MissingPostcode)?;

        let services = self
            .postal
            .domestic_services(parcel, &self.origin, postcode)
            .await?;
        let services_seen = services.len();

        let regular = find_by_code(&services, DOMESTIC_REGULAR_CODE);
        let express = find_by_code(&services, DOMESTIC_EXPRESS_CODE);
        let (Some(regular), Some(express)) = (regular, express) else {
            return Err(QuoteError::shipping_unavailable(
                "required domestic services missing from carrier response",
            ));
        };

        let options = vec![
            ShippingOption::new(
                DOMESTIC_REGULAR_NAME,
                Money::from_decimal(regular.price, self.config.quote_currency.clone())?,
            ),
            ShippingOption::new(
                DOMESTIC_EXPRESS_NAME,
                Money::from_decimal(express.price, self.config.quote_currency.clone())?,
            ),
        ];

        Ok(ResolutionOutcome {
            services_omitted: services_seen.saturating_sub(options.len()),
            services_seen,
            options,
            route: RouteBranch::Domestic,
        })
    }

    /// International branch: provider services filtered to the allow-list.
    async fn resolve_international(
        &self,
        parcel: &ParcelSpec,
        destination: &Destination,
    ) -> QuoteResult<ResolutionOutcome> {
        let services = self
            .postal
            .international_services(destination.country(), parcel.weight_kg())
            .await?;
        let services_seen = services.len();

        let mut options = Vec::new();
        for service in services {
            if !self.is_supported_international(&service.name) {
                continue;
            }
            let amount = Money::from_decimal(service.price, self.config.quote_currency.clone())?;
            options.push(ShippingOption::new(service.name, amount));
        }

        if options.is_empty() {
            return Err(QuoteError::shipping_unavailable(format!(
                "no supported international services to {}",
                destination.country()
            )));
        }

        Ok(ResolutionOutcome {
            services_omitted: services_seen.saturating_sub(options.len()),
            services_seen,
            options,
            route: RouteBranch::International,
        })
    }

    /// Heavy-freight branch: availability probe, then one concurrent quote
    /// call per listed service.
    ///
    /// A failed or timed-out individual quote does not abort the calls
    /// already in flight; it is logged and omitted from the aggregate.
    async fn resolve_heavy_freight(
        &self,
        parcel: &ParcelSpec,
        destination: &Destination,
    ) -> QuoteResult<ResolutionOutcome> {
        let request = FreightRequest {
            parcel: *parcel,
            origin: self.origin.clone(),
            destination: destination.clone(),
        };

        let listings = self.freight.available_services(&request).await?;
        let services_seen = listings.len();
        if listings.is_empty() {
            return Err(QuoteError::shipping_unavailable(
                "no freight services available for this parcel",
            ));
        }

        let per_call_timeout = Duration::from_millis(self.config.per_call_timeout_ms);
        let mut handles = Vec::with_capacity(listings.len());
        for listing in listings {
            let freight = Arc::clone(&self.freight);
            let request = request.clone();
            let handle = tokio::spawn(async move {
                let service_id = listing.id;
                let service_name = listing.name;
                match timeout(per_call_timeout, freight.quote_service(&request, &service_id)).await
                {
                    Ok(Ok(quote)) => Ok(quote),
                    Ok(Err(e)) => Err((service_name, e.to_string())),
                    Err(_) => Err((service_name, "quote request timed out".to_string())),
                }
            });
            handles.push(handle);
        }

        let mut options = Vec::new();
        let mut failures = Vec::new();
        for joined in join_all(handles).await {
            match joined {
                Ok(Ok(quote)) => {
                    let display_name = format!("{} - {}", quote.carrier, quote.service_name);
                    match Money::from_decimal(quote.sell_price, self.config.quote_currency.clone())
                    {
                        Ok(amount) => options.push(ShippingOption::new(display_name, amount)),
                        Err(e) => {
                            tracing::warn!(service = %display_name, error = %e, "freight quote omitted");
                            failures.push(e.to_string());
                        }
                    }
                }
                Ok(Err((service, message))) => {
                    tracing::warn!(service = %service, error = %message, "freight quote omitted");
                    failures.push(message);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "freight quote task failed");
                    failures.push(format!("quote task failed: {}", e));
                }
            }
        }

        options.truncate(self.config.freight_option_cap);
        if options.is_empty() {
            return Err(QuoteError::shipping_unavailable(failures.join("; ")));
        }

        Ok(ResolutionOutcome {
            services_omitted: services_seen.saturating_sub(options.len()),
            services_seen,
            options,
            route: RouteBranch::HeavyFreight,
        })
    }

    /// Returns true if the service name is on the international allow-list.
    fn is_supported_international(&self, service_name: &str) -> bool {
        self.config
            .international_service_names
            .iter()
            .any(|name| name == service_name)
    }
}

/// Finds a postal service by its carrier code.
fn find_by_code<'a>(services: &'a [PostalService], code: &str) -> Option<&'a PostalService> {
    services.iter().find(|service| service.code == code)
}
