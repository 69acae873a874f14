//! Handler for the storefront render endpoint.

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};

use crate::api::dto::render::RenderRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Renders a template package with the caller's store data.
///
/// # Endpoint
///
/// `POST /api/templates/{id}/render`
///
/// # Response
///
/// `200 OK` with a complete `text/html` document.
///
/// # Errors
///
/// - 400 Bad Request: invalid store, product or theme data
/// - 403 Forbidden: package or custom theme not included in `tier`
/// - 404 Not Found: unknown package id
/// - 500 Internal Server Error: a referenced component is missing
pub async fn render_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RenderRequest>,
) -> Result<Html<String>, AppError> {
    let html = state
        .storefront_service
        .render_package(&id, payload.tier, payload.input)
        .await?;

    Ok(Html(html))
}
