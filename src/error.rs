//! Error types shared across the service.
//!
//! [`TemplateError`] is the typed failure of the composition pipeline
//! (component store, compositor, renderer). [`AppError`] is the HTTP-facing
//! error every handler returns; it renders as
//! `{"error": {"code", "message", "details"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::entities::ComponentKind;

/// Failures of the template composition and rendering pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The markup or style file of a component is absent from the catalog.
    #[error("component not found: {kind}/{name}")]
    ComponentNotFound { kind: ComponentKind, name: String },

    #[error("invalid component name '{name}'")]
    InvalidComponentName { name: String },

    /// Render input failed validation before any template was evaluated.
    #[error("invalid template data: {field}: {reason}")]
    InvalidTemplateData { field: String, reason: String },

    /// A currency amount that cannot be formatted (NaN or infinite).
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("template package not found: {0}")]
    PackageNotFound(String),

    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("component catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TemplateError {
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplateData {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Forbidden { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                let body = ErrorBody {
                    error: ErrorInfo {
                        code: "unauthorized",
                        message,
                        details,
                    },
                };
                return (
                    StatusCode::UNAUTHORIZED,
                    [(axum::http::header::WWW_AUTHENTICATE, "Bearer")],
                    Json(body),
                )
                    .into_response();
            }
            AppError::Forbidden { message, details } => {
                (StatusCode::FORBIDDEN, "forbidden", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TemplateError> for AppError {
    fn from(e: TemplateError) -> Self {
        match e {
            TemplateError::ComponentNotFound { kind, name } => AppError::internal(
                "Component not found",
                json!({ "kind": kind.as_str(), "name": name }),
            ),
            TemplateError::InvalidComponentName { name } => AppError::bad_request(
                "Invalid component name",
                json!({ "name": name, "allowed": "a-z, 0-9, hyphens" }),
            ),
            TemplateError::InvalidTemplateData { field, reason } => AppError::bad_request(
                "Invalid template data",
                json!({ "field": field, "reason": reason }),
            ),
            TemplateError::InvalidAmount(amount) => AppError::bad_request(
                "Invalid currency amount",
                json!({ "amount": amount.to_string() }),
            ),
            TemplateError::PackageNotFound(id) => {
                AppError::not_found("Template not found", json!({ "id": id }))
            }
            TemplateError::Render(e) => {
                tracing::error!("Template rendering failed: {}", e);
                AppError::internal("Template rendering failed", json!({ "reason": e.to_string() }))
            }
            TemplateError::Io(e) => {
                tracing::error!("Component catalog I/O error: {}", e);
                AppError::internal("Component catalog unavailable", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        if matches!(e, sqlx::Error::RowNotFound) {
            return AppError::not_found("Record not found", json!({}));
        }

        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}
