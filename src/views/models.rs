//! Model list and model form for one brand
//!
//! - GET /brands/{brand_id}/models      - list a brand's models
//! - GET /brands/{brand_id}/add-model   - empty model form
//! - POST /brands/{brand_id}/add-model  - create a model, redirect to the list on 201

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};

use crate::models::{Brand, CreateModelInput};
use crate::services::Created;
use crate::views::{brand_page_path, AppState, ModelRow};

/// Shown when the backend gives no detail for a failed model creation
pub const CREATE_MODEL_FALLBACK: &str = "Error creating the model";

#[derive(Debug, Default, Serialize)]
pub struct ModelListView {
    pub brand_id: String,
    /// Brand name when it resolves, otherwise the raw route parameter
    pub brand_label: String,
    pub models: Vec<ModelRow>,
    pub add_model_href: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ModelFormView {
    pub brand_id: String,
    pub action: String,
    pub name: String,
    pub average_price: String,
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub average_price: String,
}

/// GET /brands/{brand_id}/models
///
/// The model collection and the brand name are fetched independently; either
/// may fail without affecting the other.
pub async fn model_list(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Html<String> {
    let (models, brands) = tokio::join!(
        state.catalog.list_models(&brand_id),
        state.catalog.list_brands()
    );

    let models = models.unwrap_or_else(|e| {
        tracing::error!("Error fetching models for brand {}: {}", brand_id, e);
        Vec::new()
    });

    let brand_name = match brands {
        Ok(brands) => Brand::find_by_param(&brands, &brand_id).map(|b| b.name.clone()),
        Err(e) => {
            tracing::error!("Error fetching brand details for {}: {}", brand_id, e);
            None
        }
    };

    let view = ModelListView {
        brand_label: brand_name.unwrap_or_else(|| brand_id.clone()),
        models: models.into_iter().map(Into::into).collect(),
        add_model_href: brand_page_path(&brand_id, "add-model"),
        brand_id,
    };
    let request_path = brand_page_path(&view.brand_id, "models");
    state.render("model_list.html", &view, &request_path)
}

/// GET /brands/{brand_id}/add-model
pub async fn model_form(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Html<String> {
    let action = brand_page_path(&brand_id, "add-model");
    let view = ModelFormView {
        brand_id,
        action: action.clone(),
        ..Default::default()
    };
    state.render("model_form.html", &view, &action)
}

/// POST /brands/{brand_id}/add-model
///
/// The price is sent as entered; text that is not a finite number goes out
/// as `null` and the backend decides.
pub async fn submit_model(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
    Form(input): Form<ModelFormInput>,
) -> Response {
    let payload = CreateModelInput::from_form(input.name.clone(), &input.average_price);

    let error = match state.catalog.create_model(&brand_id, &payload).await {
        Ok(Created::Created(model)) => {
            tracing::info!("Created model {} ({}) for brand {}", model.id, model.name, brand_id);
            return Redirect::to(&brand_page_path(&brand_id, "models")).into_response();
        }
        Ok(Created::Unexpected(status)) => {
            tracing::warn!("Model creation answered {} instead of 201", status);
            CREATE_MODEL_FALLBACK.to_string()
        }
        Err(e) => {
            tracing::warn!(
                status = ?e.status(),
                "Error creating model for brand {}: {}",
                brand_id,
                e
            );
            e.detail().unwrap_or(CREATE_MODEL_FALLBACK).to_string()
        }
    };

    let action = brand_page_path(&brand_id, "add-model");
    let view = ModelFormView {
        brand_id,
        action: action.clone(),
        name: input.name,
        average_price: input.average_price,
        error,
    };
    state.render("model_form.html", &view, &action).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::testing::FakeCatalog;
    use crate::views::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn brands() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Acura", "average_price": 702109.0},
            {"id": 5, "name": "Audi", "average_price": 630759.0}
        ])
    }

    #[tokio::test]
    async fn test_model_list_shows_brand_name_and_models() {
        let (router, fake) = app(FakeCatalog::new()
            .reply("GET", "/brands", 200, brands())
            .reply(
                "GET",
                "/brands/5/models",
                200,
                json!([{"id": 10, "name": "Q5", "average_price": 350000.0}]),
            ));

        let (status, _, body) = send(&router, get_request("/brands/5/models")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<span class="brand-label">Audi</span>"#));
        assert!(body.contains("Q5"));
        assert!(body.contains("Average price: 350000"));
        assert!(body.contains(r#"href="/brands/5/add-model""#));

        let mut paths: Vec<String> = fake.calls().into_iter().map(|c| c.path).collect();
        paths.sort();
        assert_eq!(paths, ["/brands", "/brands/5/models"]);
    }

    #[tokio::test]
    async fn test_model_list_unknown_brand_falls_back_to_raw_id() {
        let (router, _) = app(FakeCatalog::new()
            .reply("GET", "/brands", 200, brands())
            .reply("GET", "/brands/42/models", 200, json!([])));

        let (_, _, body) = send(&router, get_request("/brands/42/models")).await;

        assert!(body.contains(r#"<span class="brand-label">42</span>"#));
        assert!(body.contains("No models available for this brand."));
    }

    #[tokio::test]
    async fn test_model_list_brand_lookup_failure_keeps_models() {
        let (router, _) = app(FakeCatalog::new()
            .fail("GET", "/brands", 503, None)
            .reply(
                "GET",
                "/brands/5/models",
                200,
                json!([{"id": 10, "name": "Q5", "average_price": 350000.0}]),
            ));

        let (status, _, body) = send(&router, get_request("/brands/5/models")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<span class="brand-label">5</span>"#));
        assert!(body.contains("Q5"));
    }

    #[tokio::test]
    async fn test_model_list_models_failure_keeps_brand_name() {
        let (router, _) = app(FakeCatalog::new()
            .reply("GET", "/brands", 200, brands())
            .fail("GET", "/brands/1/models", 404, Some("Brand not found")));

        let (_, _, body) = send(&router, get_request("/brands/1/models")).await;

        assert!(body.contains(r#"<span class="brand-label">Acura</span>"#));
        assert!(body.contains("No models available for this brand."));
        assert!(!body.contains("Brand not found"));
    }

    #[tokio::test]
    async fn test_model_list_non_numeric_id_shows_raw_id() {
        let (router, _) = app(FakeCatalog::new()
            .reply("GET", "/brands", 200, brands())
            .fail("GET", "/brands/abc/models", 422, None));

        let (_, _, body) = send(&router, get_request("/brands/abc/models")).await;

        assert!(body.contains(r#"<span class="brand-label">abc</span>"#));
    }

    #[tokio::test]
    async fn test_model_list_id_with_trailing_text_resolves_brand() {
        let (router, fake) = app(FakeCatalog::new()
            .reply("GET", "/brands", 200, brands())
            .fail("GET", "/brands/5abc/models", 422, None));

        let (_, _, body) = send(&router, get_request("/brands/5abc/models")).await;

        assert!(body.contains(r#"<span class="brand-label">Audi</span>"#));
        // The backend still receives the raw segment.
        assert!(fake.calls().iter().any(|c| c.path == "/brands/5abc/models"));
    }

    #[tokio::test]
    async fn test_model_form_renders_for_brand() {
        let (router, fake) = app(FakeCatalog::new());

        let (status, _, body) = send(&router, get_request("/brands/5/add-model")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Add Model to Brand 5"));
        assert!(body.contains(r#"action="/brands/5/add-model""#));
        assert!(body.contains(r#"type="number""#));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_model_created_redirects_to_brand_models() {
        let (router, fake) = app(FakeCatalog::new().reply(
            "POST",
            "/brands/5/models",
            201,
            json!({"id": 11, "name": "X", "average_price": 100.0}),
        ));

        let (status, headers, _) = send(
            &router,
            form_request("/brands/5/add-model", "name=X&average_price=100"),
        )
        .await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location(&headers), Some("/brands/5/models"));
        assert_eq!(
            fake.calls()[0].body,
            Some(json!({"name": "X", "average_price": 100.0}))
        );
    }

    #[tokio::test]
    async fn test_submit_model_failure_shows_detail_and_keeps_input() {
        let (router, _) = app(FakeCatalog::new().fail(
            "POST",
            "/brands/5/models",
            400,
            Some("Average price must be above 100,000.00"),
        ));

        let (status, headers, body) = send(
            &router,
            form_request("/brands/5/add-model", "name=X&average_price=10"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(location(&headers), None);
        assert!(body.contains("Average price must be above 100,000.00"));
        assert!(body.contains(r#"value="X""#));
        assert!(body.contains(r#"value="10""#));
    }

    #[tokio::test]
    async fn test_submit_model_non_numeric_price_is_sent_as_null() {
        let (router, fake) = app(FakeCatalog::new().fail("POST", "/brands/5/models", 422, None));

        let (_, _, body) = send(
            &router,
            form_request("/brands/5/add-model", "name=X&average_price=lots"),
        )
        .await;

        assert_eq!(
            fake.calls()[0].body,
            Some(json!({"name": "X", "average_price": null}))
        );
        assert!(body.contains(CREATE_MODEL_FALLBACK));
    }

    #[tokio::test]
    async fn test_created_model_shows_up_in_brand_listing() {
        let (router, _) = app(FakeCatalog::stateful());

        let (status, _, _) = send(&router, form_request("/add-brand", "name=Acme")).await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let (status, headers, _) = send(
            &router,
            form_request("/brands/1/add-model", "name=X&average_price=100"),
        )
        .await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location(&headers), Some("/brands/1/models"));

        let (_, _, body) = send(&router, get_request("/brands/1/models")).await;
        assert!(body.contains(r#"<span class="brand-label">Acme</span>"#));
        assert!(body.contains(r#"<span class="model-name">X</span>"#));
        assert!(body.contains("Average price: 100"));
    }
}
