//! API route configuration.
//!
//! Public routes are read-only plus rendering; admin routes require Bearer
//! authentication via [`crate::api::middleware::admin_auth`].

use crate::api::handlers::{
    component_list_handler, create_template_handler, delete_template_handler,
    get_template_handler, render_handler, template_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public read-only routes.
///
/// # Endpoints
///
/// - `GET /templates`               - List template packages (`?tier=&q=`)
/// - `GET /templates/{id}`          - Template package detail
/// - `GET /components/{kind}`       - Component names of a kind
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(template_list_handler))
        .route("/templates/{id}", get(get_template_handler))
        .route("/components/{kind}", get(component_list_handler))
}

/// Render route, rate limited separately.
///
/// - `POST /templates/{id}/render`  - Render a package as `text/html`
pub fn render_routes() -> Router<AppState> {
    Router::new().route("/templates/{id}/render", post(render_handler))
}

/// Admin routes, protected by Bearer token authentication.
///
/// - `POST   /templates`            - Register a template package
/// - `DELETE /templates/{id}`       - Delete a non-built-in package
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", post(create_template_handler))
        .route("/templates/{id}", delete(delete_template_handler))
}
