//! Catalog service
//!
//! Typed operations over the catalog API:
//! - List brands, create a brand
//! - List a brand's models, create a model under a brand
//! - Filter models across the catalog by price range
//!
//! Each call maps to exactly one API request. Nothing is cached, so every
//! view sees whatever the backend returns at the time it asks.

use crate::client::{ApiClientError, ApiResponse, CatalogApi};
use crate::models::{Brand, CreateBrandInput, CreateModelInput, Model, ModelFilter};
use std::sync::Arc;

/// Outcome of a create call that reached the backend successfully.
///
/// The backend signals creation with `201 Created`; any other success status
/// is reported as-is so callers can refuse to treat it as a creation.
#[derive(Debug, Clone, PartialEq)]
pub enum Created<T> {
    Created(T),
    Unexpected(u16),
}

pub struct CatalogService {
    api: Arc<dyn CatalogApi>,
}

impl CatalogService {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self { api }
    }

    /// GET /brands, in backend order
    pub async fn list_brands(&self) -> Result<Vec<Brand>, ApiClientError> {
        self.api.get("/brands").await?.json()
    }

    /// POST /brands
    pub async fn create_brand(
        &self,
        input: &CreateBrandInput,
    ) -> Result<Created<Brand>, ApiClientError> {
        let response = self.api.post("/brands", &to_body(input)?).await?;
        created(response)
    }

    /// GET /brands/{brand_id}/models
    pub async fn list_models(&self, brand_id: &str) -> Result<Vec<Model>, ApiClientError> {
        self.api.get(&brand_models_path(brand_id)).await?.json()
    }

    /// POST /brands/{brand_id}/models
    pub async fn create_model(
        &self,
        brand_id: &str,
        input: &CreateModelInput,
    ) -> Result<Created<Model>, ApiClientError> {
        let response = self
            .api
            .post(&brand_models_path(brand_id), &to_body(input)?)
            .await?;
        created(response)
    }

    /// GET /models with the populated bounds only
    pub async fn filter_models(&self, filter: &ModelFilter) -> Result<Vec<Model>, ApiClientError> {
        self.api.get(&filter.to_path()).await?.json()
    }
}

/// Resource path of a brand's model collection
pub fn brand_models_path(brand_id: &str) -> String {
    format!("/brands/{}/models", urlencoding::encode(brand_id))
}

fn to_body<T: serde::Serialize>(input: &T) -> Result<serde_json::Value, ApiClientError> {
    serde_json::to_value(input).map_err(|e| ApiClientError::Decode(e.to_string()))
}

fn created<T: serde::de::DeserializeOwned>(
    response: ApiResponse,
) -> Result<Created<T>, ApiClientError> {
    if response.status != 201 {
        return Ok(Created::Unexpected(response.status));
    }
    response.json().map(Created::Created)
}
