//! Brand list and brand form
//!
//! - GET /            - list brands
//! - GET /add-brand   - empty brand form
//! - POST /add-brand  - create a brand, redirect to the list on 201

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};

use crate::models::CreateBrandInput;
use crate::services::Created;
use crate::views::{AppState, BrandRow};

/// Shown when the backend gives no detail for a failed brand creation
pub const CREATE_BRAND_FALLBACK: &str = "Error creating the brand";

#[derive(Debug, Default, Serialize)]
pub struct BrandListView {
    pub brands: Vec<BrandRow>,
}

#[derive(Debug, Default, Serialize)]
pub struct BrandFormView {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct BrandFormInput {
    #[serde(default)]
    pub name: String,
}

/// GET / - brands in backend order; a failed fetch leaves the list empty
pub async fn brand_list(State(state): State<AppState>) -> Html<String> {
    let mut view = BrandListView::default();

    match state.catalog.list_brands().await {
        Ok(brands) => view.brands = brands.into_iter().map(Into::into).collect(),
        Err(e) => tracing::error!("Error fetching brands: {}", e),
    }

    state.render("brand_list.html", &view, "/")
}

/// GET /add-brand
pub async fn brand_form(State(state): State<AppState>) -> Html<String> {
    state.render("brand_form.html", &BrandFormView::default(), "/add-brand")
}

/// POST /add-brand
pub async fn submit_brand(
    State(state): State<AppState>,
    Form(input): Form<BrandFormInput>,
) -> Response {
    let payload = CreateBrandInput { name: input.name };

    let error = match state.catalog.create_brand(&payload).await {
        Ok(Created::Created(brand)) => {
            tracing::info!("Created brand {} ({})", brand.id, brand.name);
            return Redirect::to("/").into_response();
        }
        Ok(Created::Unexpected(status)) => {
            tracing::warn!("Brand creation answered {} instead of 201", status);
            CREATE_BRAND_FALLBACK.to_string()
        }
        Err(e) => {
            tracing::warn!(status = ?e.status(), "Error creating brand: {}", e);
            e.detail().unwrap_or(CREATE_BRAND_FALLBACK).to_string()
        }
    };

    let view = BrandFormView {
        name: payload.name,
        error,
    };
    state.render("brand_form.html", &view, "/add-brand").into_response()
}
