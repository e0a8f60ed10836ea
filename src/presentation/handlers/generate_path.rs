use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ArchiveStore, ClassifierClient};
use crate::presentation::handlers::error::intake_error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GeneratePathRequest {
    pub file_id: String,
    pub original_extension: String,
}

#[derive(Serialize)]
pub struct GeneratePathResponse {
    pub suggested_name: String,
    pub suggested_path: String,
    pub full_path: String,
    pub folder_structure: Vec<String>,
    pub subfolder: String,
    pub tipo: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_path_handler<C, A>(
    State(state): State<AppState<C, A>>,
    Json(request): Json<GeneratePathRequest>,
) -> impl IntoResponse
where
    C: ClassifierClient + 'static,
    A: ArchiveStore + 'static,
{
    let extension = normalize_extension(&request.original_extension);

    match state.intake_service.finalize(&request.file_id, &extension).await {
        Ok(plan) => {
            tracing::info!(
                session_id = %request.file_id,
                tipo = %plan.work_type,
                path = %plan.full_path,
                "Folder plan generated"
            );
            (
                StatusCode::OK,
                Json(GeneratePathResponse {
                    suggested_name: plan.canonical_filename,
                    suggested_path: plan.base_path,
                    full_path: plan.full_path,
                    folder_structure: plan.standard_folders,
                    subfolder: plan.target_subfolder,
                    tipo: plan.work_type.as_str().to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => intake_error_response(e),
    }
}

/// `"pdf"` and `".pdf"` both arrive in the wild; the plan wants one shape.
pub fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}
