//! View layer - route-bound pages and routing
//!
//! Every view owns only per-request state. Loading a page triggers its fetches;
//! submitting a form triggers its write and either redirects or re-renders the
//! form with an inline error. Pages:
//! - Brand list and brand form
//! - Model list and model form for a brand
//! - Filtered model list
//! - Stylesheet and not-found fallback

pub mod brands;
pub mod filter;
pub mod models;
pub mod static_files;

use axum::{response::Html, routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use tera::Context as TeraContext;
use tower_http::trace::TraceLayer;

use crate::models::{Brand, Model};
use crate::services::CatalogService;
use crate::theme::{StandardTemplateVars, TemplateEngine};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>, templates: Arc<TemplateEngine>) -> Self {
        Self { catalog, templates }
    }

    /// Render a view's state into its template inside the navigation shell
    pub fn render<T: Serialize>(
        &self,
        template: &str,
        view: &T,
        request_path: &str,
    ) -> Html<String> {
        let context = TeraContext::from_serialize(view).unwrap_or_else(|e| {
            tracing::error!("Failed to build context for '{}': {}", template, e);
            TeraContext::new()
        });
        let standard_vars = StandardTemplateVars::new(request_path);
        Html(self.templates.render_page(template, &context, &standard_vars))
    }
}

/// Build the console router with the navigation routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(brands::brand_list))
        .route("/add-brand", get(brands::brand_form).post(brands::submit_brand))
        .route("/brands/{brand_id}/models", get(models::model_list))
        .route(
            "/brands/{brand_id}/add-model",
            get(models::model_form).post(models::submit_model),
        )
        .route("/models/filter", get(filter::filter_page).post(filter::submit_filter))
        .route("/static/app.css", get(static_files::stylesheet))
        .fallback(static_files::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A brand as displayed in the brand list
#[derive(Debug, Serialize)]
pub struct BrandRow {
    pub id: i64,
    pub name: String,
    pub average_price: String,
    pub models_href: String,
}

impl From<Brand> for BrandRow {
    fn from(brand: Brand) -> Self {
        Self {
            models_href: brand_page_path(&brand.id.to_string(), "models"),
            id: brand.id,
            name: brand.name,
            average_price: format_price(brand.average_price),
        }
    }
}

/// A model as displayed in model listings
#[derive(Debug, Serialize)]
pub struct ModelRow {
    pub id: i64,
    pub name: String,
    pub average_price: String,
}

impl From<Model> for ModelRow {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            average_price: format_price(model.average_price),
        }
    }
}

/// Console path under a brand, e.g. `/brands/5/models`
pub fn brand_page_path(brand_id: &str, page: &str) -> String {
    format!("/brands/{}/{}", urlencoding::encode(brand_id), page)
}

/// Prices render without a trailing `.0`; a missing price renders as `-`
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::services::catalog::testing::FakeCatalog;
    use axum::http::StatusCode;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(702109.0)), "702109");
        assert_eq!(format_price(Some(125000.5)), "125000.5");
        assert_eq!(format_price(None), "-");
    }

    #[test]
    fn test_brand_page_path_encodes_segment() {
        assert_eq!(brand_page_path("5", "models"), "/brands/5/models");
        assert_eq!(brand_page_path("a b", "add-model"), "/brands/a%20b/add-model");
    }

    #[tokio::test]
    async fn test_header_links_on_every_page() {
        let fake = FakeCatalog::new().reply("GET", "/brands", 200, serde_json::json!([]));
        let (router, _) = app(fake);

        for uri in ["/", "/add-brand", "/models/filter", "/brands/1/add-model"] {
            let (status, _, body) = send(&router, get_request(uri)).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert!(body.contains(r#"href="/""#), "{}", uri);
            assert!(body.contains(r#"href="/add-brand""#), "{}", uri);
            assert!(body.contains(r#"href="/models/filter""#), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_renders_not_found() {
        let (router, fake) = app(FakeCatalog::new());

        let (status, _, body) = send(&router, get_request("/nowhere")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        assert!(fake.calls().is_empty());
    }
}
