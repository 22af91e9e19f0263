//! Filtered model list
//!
//! - GET /models/filter   - empty filter form, nothing fetched
//! - POST /models/filter  - query `/models` with the populated bounds
//!
//! Unlike the forms, a failed filter shows a fixed message and never the
//! backend's detail.

use axum::{extract::State, response::Html, Form};
use serde::Serialize;

use crate::models::ModelFilter;
use crate::views::{AppState, ModelRow};

pub const FILTER_FAILED: &str = "Error filtering models";

#[derive(Debug, Default, Serialize)]
pub struct FilterView {
    pub greater: String,
    pub lower: String,
    pub models: Vec<ModelRow>,
    pub error: String,
}

/// GET /models/filter
pub async fn filter_page(State(state): State<AppState>) -> Html<String> {
    state.render("model_filter.html", &FilterView::default(), "/models/filter")
}

/// POST /models/filter
pub async fn submit_filter(
    State(state): State<AppState>,
    Form(filter): Form<ModelFilter>,
) -> Html<String> {
    let mut view = FilterView {
        greater: filter.greater_value().to_string(),
        lower: filter.lower_value().to_string(),
        ..Default::default()
    };

    match state.catalog.filter_models(&filter).await {
        Ok(models) => view.models = models.into_iter().map(Into::into).collect(),
        Err(e) => {
            tracing::error!("Error fetching filtered models: {}", e);
            view.error = FILTER_FAILED.to_string();
        }
    }

    state.render("model_filter.html", &view, "/models/filter")
}
