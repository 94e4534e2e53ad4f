// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! REST client for the booking backend.
//!
//! Wraps the backend endpoints used by the wizard:
//!
//! - `POST /bookings` / `PUT /bookings/{id}` / `GET /bookings/{id}`
//! - `GET /addresses`
//! - `GET /providers`
//!
//! No retries. No timeout unless one is configured.

use crate::booking::{Address, Booking, Provider};
use crate::error::{ApiError, ApiResult};
use crate::payload::SubmissionPayload;
use crate::services::{AddressDirectory, BookingService, ProviderDirectory};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for the booking backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL, e.g. `https://api.example.com/v1`.
    pub base_url: String,
    /// Bearer token sent with every request, if set.
    pub auth_token: Option<String>,
    /// Per-request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Error body shape used by the backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// HTTP implementation of every collaborator trait.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Creates a backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client: reqwest::Client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a backend client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub const fn with_client(client: reqwest::Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(path, "GET");
        let response = self
            .authorize(self.client.get(self.url(path)))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Status`] carrying the server's
    /// message on failure.
    async fn ensure_success(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: String = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message: Option<String> = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message.or(parsed.error));

        warn!(status = status.as_u16(), ?message, "Booking API request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
            body,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl BookingService for HttpBackend {
    async fn create(&self, payload: &SubmissionPayload) -> ApiResult<Booking> {
        debug!(event_type = %payload.event_type, "Creating booking");
        let response = self
            .authorize(self.client.post(self.url("/bookings")))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update(&self, id: &str, payload: &SubmissionPayload) -> ApiResult<Booking> {
        debug!(booking_id = id, "Updating booking");
        let response = self
            .authorize(self.client.put(self.url(&format!("/bookings/{id}"))))
            .json(payload)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn get(&self, id: &str) -> ApiResult<Booking> {
        self.get_json(&format!("/bookings/{id}")).await
    }
}

#[async_trait]
impl AddressDirectory for HttpBackend {
    async fn list_addresses(&self) -> ApiResult<Vec<Address>> {
        self.get_json("/addresses").await
    }
}

#[async_trait]
impl ProviderDirectory for HttpBackend {
    async fn list_providers(&self) -> ApiResult<Vec<Provider>> {
        self.get_json("/providers").await
    }
}
