//! # HTTP Client
//!
//! Thin reqwest wrapper shared by the carrier clients.
//!
//! Every provider endpoint this crate talks to is a JSON-over-GET lookup, so
//! the surface is three GET variants funnelled through one send path that
//! enforces the timeout and maps transport and status failures onto
//! [`CarrierError`].

use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// JSON GET client with carrier error mapping.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    /// Deadline applied to every request, in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a client enforcing the given per-request deadline.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the underlying client cannot be
    /// built.
    pub fn new(timeout_ms: u64) -> CarrierResult<Self> {
        Self::build(timeout_ms, None)
    }

    /// Creates a client that also sends the given headers on every request,
    /// used for API-key authentication.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Internal` if the underlying client cannot be
    /// built.
    pub fn with_default_headers(
        timeout_ms: u64,
        default_headers: reqwest::header::HeaderMap,
    ) -> CarrierResult<Self> {
        Self::build(timeout_ms, Some(default_headers))
    }

    fn build(
        timeout_ms: u64,
        default_headers: Option<reqwest::header::HeaderMap>,
    ) -> CarrierResult<Self> {
        let mut builder = Client::builder().timeout(Duration::from_millis(timeout_ms));
        if let Some(headers) = default_headers {
            builder = builder.default_headers(headers);
        }
        let inner = builder
            .build()
            .map_err(|e| CarrierError::internal(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { inner, timeout_ms })
    }

    /// Returns the per-request deadline in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// GETs a URL and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// `CarrierError::Timeout`/`Connection` for transport failures, a
    /// status-derived variant for non-2xx responses, and
    /// `CarrierError::Protocol` for an unparseable body.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> CarrierResult<T> {
        self.send_json(self.inner.get(url)).await
    }

    /// GETs a URL with query parameters and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Same classification as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> CarrierResult<T> {
        self.send_json(self.inner.get(url).query(params)).await
    }

    /// GETs a URL with query parameters and per-request headers (used for
    /// the session-cookie credential).
    ///
    /// # Errors
    ///
    /// Same classification as [`HttpClient::get`].
    pub async fn get_with_params_and_headers<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
        headers: reqwest::header::HeaderMap,
    ) -> CarrierResult<T> {
        self.send_json(self.inner.get(url).query(params).headers(headers))
            .await
    }

    /// The single send path: transport mapping, status check, JSON decode.
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> CarrierResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| self.classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CarrierError::protocol(format!("cannot decode response body: {}", e)))
    }

    fn classify_transport(&self, error: &reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::timeout_with_duration("no response from provider", self.timeout_ms)
        } else {
            CarrierError::connection(error.to_string())
        }
    }
}

/// Maps a non-2xx status onto the carrier taxonomy.
fn classify_status(status: StatusCode, body: &str) -> CarrierError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            CarrierError::authentication(format!("{}: {}", status, body))
        }
        StatusCode::TOO_MANY_REQUESTS => CarrierError::rate_limited(status.to_string()),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            CarrierError::invalid_request(format!("{}: {}", status, body))
        }
        s if s.is_server_error() => CarrierError::connection(format!("{}: {}", status, body)),
        _ => CarrierError::protocol(format!("unexpected status {}: {}", status, body)),
    }
}
