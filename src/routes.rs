//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`                        - Health check: registry and component catalog
//! - `/api/templates`, `/api/components`   - REST API (public reads)
//! - `POST /api/templates/{id}/render`     - Storefront rendering (rate limited)
//! - `POST|DELETE /api/templates[/{id}]`   - Package administration (Bearer admin token)
//! - `/templates`                          - Gallery and previews
//! - `/static`                             - Thumbnails and sample images
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on render and admin routes
//! - **Authentication** - Bearer admin token on admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{admin_auth, rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth::layer,
        ))
        .layer(rate_limit::admin_layer());

    let render_router = api::routes::render_routes().layer(rate_limit::render_layer());

    let api_router = api::routes::public_routes()
        .merge(render_router)
        .merge(admin_router);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/templates", web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
