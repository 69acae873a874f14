//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::ComponentKind;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All checks passed
/// - **503 Service Unavailable**: The registry is unreachable or the component
///   catalog is missing a kind
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "registry": { "status": "ok", "message": "postgres, 4 templates" },
///     "components": { "status": "ok", "message": "11 components" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry = check_registry(&state).await;
    let components = check_components(&state).await;

    let all_healthy = registry.is_ok() && components.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry,
            components,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_registry(state: &AppState) -> CheckStatus {
    match state.package_service.count().await {
        Ok(count) => CheckStatus::ok(format!("{}, {} templates", state.registry_backend, count)),
        Err(e) => CheckStatus::error(format!("Registry error: {}", e)),
    }
}

/// Every kind must have at least one component, otherwise no package can render.
async fn check_components(state: &AppState) -> CheckStatus {
    let mut total = 0;

    for kind in ComponentKind::ALL {
        match state.components.list(kind).await {
            Ok(names) if names.is_empty() => {
                return CheckStatus::error(format!("No {} components", kind));
            }
            Ok(names) => total += names.len(),
            Err(e) => return CheckStatus::error(format!("Catalog error: {}", e)),
        }
    }

    CheckStatus::ok(format!("{} components", total))
}
