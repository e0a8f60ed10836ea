use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::IntakeError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
            suggestion: None,
        }
    }
}

/// One status mapping for every intake failure. User-correctable states are
/// 400s carrying the field and any suggestion; upstream and store outages are
/// 503s so callers retry; a flow-table defect is a loud 500.
pub fn intake_error_response(error: IntakeError) -> Response {
    let (status, body) = match error {
        IntakeError::UserCorrectable {
            field,
            message,
            suggestion,
        } => {
            tracing::debug!(field = %field, "Answer rejected");
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message,
                    field: Some(field),
                    suggestion,
                },
            )
        }
        IntakeError::MissingFields(fields) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::message(format!(
                "faltan campos obligatorios: {}",
                fields.join(", ")
            )),
        ),
        IntakeError::SessionNotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::message("sesión no encontrada"),
        ),
        IntakeError::Upstream(e) => {
            tracing::warn!(error = %e, "Classifier unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::message(
                    "el servicio de clasificación no está disponible, inténtalo de nuevo",
                ),
            )
        }
        IntakeError::Store(e) => {
            tracing::error!(error = %e, "Session store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::message("el almacén de sesiones no está disponible"),
            )
        }
        IntakeError::Configuration(e) => {
            tracing::error!(error = %e, "Question flow misconfigured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::message("error interno en el flujo de preguntas"),
            )
        }
    };
    (status, Json(body)).into_response()
}
