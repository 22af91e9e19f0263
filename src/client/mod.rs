//! Catalog API client
//!
//! A single configured HTTP client with a fixed base URL. Every view talks to
//! the catalog backend through the [`CatalogApi`] trait so handlers can be
//! exercised against an in-memory implementation.

mod error;

pub use error::ApiClientError;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;

/// Parsed response of a successful request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// Decode the payload into a typed value
    pub fn json<T: serde::de::DeserializeOwned>(self) -> Result<T, ApiClientError> {
        serde_json::from_value(self.data).map_err(|e| ApiClientError::Decode(e.to_string()))
    }
}

/// Transport seam between views and the catalog backend.
///
/// `path` is a resource path relative to the configured base URL. Success
/// means a 2xx status; everything else is an [`ApiClientError`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<ApiResponse, ApiClientError>;
    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, ApiClientError>;
}

/// `reqwest`-backed implementation of [`CatalogApi`]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("catalog-console/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiClientError::Transport(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn boxed(base_url: impl Into<String>) -> Result<Arc<dyn CatalogApi>, ApiClientError> {
        Ok(Arc::new(Self::new(base_url)?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ApiClientError> {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", method, path, e);
            ApiClientError::Transport(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, path, status.as_u16());

        let bytes = response.bytes().await.map_err(|e| {
            ApiClientError::Transport(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(ApiClientError::from_status(status.as_u16(), &bytes));
        }

        let data = parse_body(status, &bytes)?;
        Ok(ApiResponse::new(status.as_u16(), data))
    }
}

fn parse_body(status: StatusCode, bytes: &[u8]) -> Result<Value, ApiClientError> {
    if bytes.is_empty() || status == StatusCode::NO_CONTENT {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ApiClientError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ApiClientError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, ApiClientError> {
        self.send(Method::POST, path, Some(body)).await
    }
}
