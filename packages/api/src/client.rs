//! The client every endpoint group hangs off.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Ack;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Typed client for the REST backend.
///
/// Endpoint methods live in [`crate::auth`], [`crate::books`],
/// [`crate::notes`] and [`crate::tags`].
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Client for the configured backend, using the real network.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env().resolved(), HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and fail on any non-2xx status.
    pub async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.config.url_for(&request.path);
        let method = request.method.as_str();
        tracing::debug!(
            method,
            %url,
            authenticated = request.credential.is_some(),
            "api request"
        );

        let response = self.transport.send(&url, request).await.map_err(|e| {
            tracing::warn!(method, %url, "api request failed: {e}");
            e
        })?;

        if response.is_success() {
            Ok(response)
        } else {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::warn!(method, %url, status = response.status, "api error: {err}");
            Err(err)
        }
    }

    /// Send a request and decode the JSON body into `R`.
    pub async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request whose body only matters for its optional `message`.
    /// Empty bodies (e.g. `204 No Content`) are accepted.
    pub async fn acknowledge(&self, request: ApiRequest) -> Result<Ack, ApiError> {
        let response = self.dispatch(request).await?;
        if response.body.trim().is_empty() {
            return Ok(Ack::default());
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
