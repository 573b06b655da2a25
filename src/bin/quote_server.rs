//! Quote service entrypoint.
//!
//! Reads layered configuration (optional `SHIPQUOTE_CONFIG` file path, then
//! environment variables, with `.env` support), wires the carrier clients
//! into the resolver, and serves the REST API.

use anyhow::Context;
use shipquote::api::rest::{AppState, create_router};
use shipquote::application::services::quote_resolver::ShippingQuoteResolver;
use shipquote::config::Settings;
use shipquote::infrastructure::carriers::{AusPostClient, InterparcelClient};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var_os("SHIPQUOTE_CONFIG").map(PathBuf::from);
    let settings =
        Settings::load(config_path.as_deref()).context("loading configuration")?;

    let timeout_ms = settings.resolver.per_call_timeout_ms;
    let postal = Arc::new(
        AusPostClient::new(
            &settings.auspost.base_url,
            &settings.auspost.api_key,
            timeout_ms,
        )
        .context("building AusPost client")?,
    );
    let freight = Arc::new(
        InterparcelClient::new(
            &settings.interparcel.base_url,
            &settings.interparcel.session_cookie,
            timeout_ms,
        )
        .context("building Interparcel client")?,
    );

    let resolver = ShippingQuoteResolver::new(
        Arc::clone(&postal) as _,
        freight,
        settings
            .origin
            .to_origin_address()
            .context("invalid origin address")?,
        settings
            .resolver
            .home_country()
            .context("invalid home country")?,
        settings
            .resolver
            .to_resolver_config()
            .context("invalid resolver settings")?,
    );

    let state = Arc::new(AppState {
        resolver: Arc::new(resolver),
        postal,
    });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.server.bind_addr))?;
    tracing::info!(addr = %settings.server.bind_addr, "shipquote listening");
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
