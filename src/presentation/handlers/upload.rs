use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{ArchiveStore, ClassifierClient};
use crate::presentation::handlers::error::{intake_error_response, ErrorResponse};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub path: String,
    pub stored_name: String,
    pub was_renamed: bool,
}

/// Final step: provision the complete folder skeleton (idempotent), write the
/// document under its canonical name and retire the session. The name the
/// store actually used is surfaced, since autorename may have changed it.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<C, A>(
    State(state): State<AppState<C, A>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    C: ClassifierClient + 'static,
    A: ArchiveStore + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!(session_id = %session_id, "Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message("no se ha adjuntado ningún archivo")),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message(format!(
                    "no se pudo leer el archivo: {e}"
                ))),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("documento").to_string();
    let extension = filename
        .rfind('.')
        .map(|i| filename[i..].to_string())
        .unwrap_or_default();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message(format!(
                    "no se pudo leer el archivo: {e}"
                ))),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let plan = match state.intake_service.finalize(&session_id, &extension).await {
        Ok(plan) => plan,
        Err(e) => return intake_error_response(e),
    };

    for folder in &plan.standard_folders {
        if let Err(e) = state.archive_store.ensure_folder(folder).await {
            tracing::error!(error = %e, folder = %folder, "Folder provisioning failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::message(format!(
                    "no se pudo crear la carpeta: {e}"
                ))),
            )
                .into_response();
        }
    }

    let stored = match state
        .archive_store
        .write_file(&plan.full_path, &plan.canonical_filename, data)
        .await
    {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!(error = %e, "Upload to archive failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::message(format!(
                    "no se pudo subir el archivo: {e}"
                ))),
            )
                .into_response();
        }
    };

    if let Err(e) = state.intake_service.discard(&session_id).await {
        return intake_error_response(e);
    }

    tracing::info!(
        session_id = %session_id,
        path = %plan.full_path,
        stored_name = %stored.stored_name,
        was_renamed = stored.was_renamed,
        "Document archived"
    );

    (
        StatusCode::OK,
        Json(UploadResponse {
            path: plan.full_path,
            stored_name: stored.stored_name,
            was_renamed: stored.was_renamed,
        }),
    )
        .into_response()
}
