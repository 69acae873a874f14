//! Handlers for template package endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::template::{
    CreateTemplateRequest, ListTemplatesQuery, TemplateListResponse, TemplateResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists template packages.
///
/// # Endpoint
///
/// `GET /api/templates?tier=PREMIUM&q=hover`
///
/// # Query Parameters
///
/// - `tier` - Exact tier match (`FREE`, `PREMIUM`, `UNLIMITED`)
/// - `q` - Case-insensitive search over id, name and description
pub async fn template_list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<TemplateListResponse>, AppError> {
    let items: Vec<TemplateResponse> = state
        .package_service
        .list(query.into())
        .await?
        .into_iter()
        .map(TemplateResponse::from)
        .collect();

    Ok(Json(TemplateListResponse {
        total: items.len(),
        items,
    }))
}

/// Returns one template package.
///
/// # Endpoint
///
/// `GET /api/templates/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the package does not exist.
pub async fn get_template_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateResponse>, AppError> {
    let package = state.package_service.get(&id).await?;
    Ok(Json(package.into()))
}

/// Registers a new template package. Admin only.
///
/// # Endpoint
///
/// `POST /api/templates`
///
/// # Request Body
///
/// ```json
/// {
///   "id": "batik-showcase",
///   "name": "Batik Showcase",
///   "description": "Overlay cards with a gradient hero",
///   "config": {
///     "nav": "nav-sticky",
///     "hero": "hero-gradient",
///     "productCard": "card-hover-overlay",
///     "footer": "footer-whatsapp"
///   },
///   "tier": "PREMIUM"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: validation failed or a component does not exist
/// - 409 Conflict: id already taken
pub async fn create_template_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<TemplateResponse>), AppError> {
    payload.validate()?;

    let package = state.package_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(package.into())))
}

/// Deletes a template package. Admin only; built-in packages are refused.
///
/// # Endpoint
///
/// `DELETE /api/templates/{id}`
///
/// # Response
///
/// - **204 No Content**: deleted
/// - **403 Forbidden**: built-in package
/// - **404 Not Found**: unknown id
pub async fn delete_template_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.package_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
