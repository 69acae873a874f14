//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{gallery_handler, preview_handler};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /`              - Template gallery (`?tier=` filter)
/// - `GET /{id}/preview`  - Package rendered with the sample store
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery_handler))
        .route("/{id}/preview", get(preview_handler))
}
