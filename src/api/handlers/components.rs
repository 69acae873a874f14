//! Handler for the component catalog endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::component::ComponentListResponse;
use crate::domain::entities::ComponentKind;
use crate::error::AppError;
use crate::state::AppState;

/// Lists component names of one kind.
///
/// # Endpoint
///
/// `GET /api/components/{kind}` where `kind` is one of `nav`, `hero`,
/// `product-card`, `footer`, `background`.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown kind.
pub async fn component_list_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ComponentListResponse>, AppError> {
    let kind: ComponentKind = kind.parse().map_err(|reason: String| {
        AppError::bad_request(
            "Unknown component kind",
            json!({
                "reason": reason,
                "allowed": ComponentKind::ALL.map(|k| k.as_str()),
            }),
        )
    })?;

    let names = state.components.list(kind).await?;

    Ok(Json(ComponentListResponse { kind, names }))
}
