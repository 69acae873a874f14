//! Live template preview.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::error::AppError;
use crate::state::AppState;

/// Renders a package with the sample store and default theme.
///
/// # Endpoint
///
/// `GET /templates/{id}/preview`
///
/// Previews are not tier-gated: the gallery shows every package.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let html = state.storefront_service.preview(&id).await?;
    Ok(Html(html))
}
