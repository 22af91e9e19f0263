//! Embedded stylesheet and the not-found page

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use serde::Serialize;

use crate::views::AppState;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.css"]
struct StaticAssets;

/// GET /static/app.css
pub async fn stylesheet() -> Response {
    match StaticAssets::get("app.css") {
        Some(content) => (
            [
                (header::CONTENT_TYPE, "text/css; charset=utf-8"),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            content.data.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[derive(Serialize)]
struct NotFoundView {}

/// Fallback for paths no view is mapped to
pub async fn not_found(State(state): State<AppState>, OriginalUri(uri): OriginalUri) -> Response {
    let page = state.render("not_found.html", &NotFoundView {}, uri.path());
    (StatusCode::NOT_FOUND, page).into_response()
}
