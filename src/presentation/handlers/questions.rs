use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ArchiveStore, ClassifierClient};
use crate::domain::{ExtractedValue, QuestionSpec};
use crate::presentation::handlers::error::intake_error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct StartRequest {
    /// Caller-supplied correlation id; a fresh one is minted when absent.
    pub file_id: Option<String>,
}

#[derive(Serialize)]
pub struct QuestionDto {
    pub id: &'static str,
    pub prompt: &'static str,
    pub required: bool,
}

impl From<&'static QuestionSpec> for QuestionDto {
    fn from(spec: &'static QuestionSpec) -> Self {
        Self {
            id: spec.id,
            prompt: spec.prompt,
            required: spec.required,
        }
    }
}

#[derive(Serialize)]
pub struct StartResponse {
    pub session_id: String,
    pub question: QuestionDto,
}

#[tracing::instrument(skip(state, request))]
pub async fn start_questions_handler<C, A>(
    State(state): State<AppState<C, A>>,
    Json(request): Json<StartRequest>,
) -> impl IntoResponse
where
    C: ClassifierClient + 'static,
    A: ArchiveStore + 'static,
{
    let session_id = request
        .file_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    match state.intake_service.start_session(&session_id).await {
        Ok(question) => {
            tracing::info!(session_id = %session_id, "Intake session started");
            (
                StatusCode::OK,
                Json(StartResponse {
                    session_id,
                    question: question.into(),
                }),
            )
                .into_response()
        }
        Err(e) => intake_error_response(e),
    }
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub file_id: String,
    pub question_id: String,
    pub answer: String,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ExtractedValueDto {
    Scalar(String),
    Parties { parte_a: String, parte_b: String },
}

impl From<ExtractedValue> for ExtractedValueDto {
    fn from(value: ExtractedValue) -> Self {
        match value {
            ExtractedValue::Scalar(v) => Self::Scalar(v),
            ExtractedValue::Parties { party_a, party_b } => Self::Parties {
                parte_a: party_a,
                parte_b: party_b,
            },
        }
    }
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub next_question: Option<QuestionDto>,
    pub completed: bool,
    pub extracted_value: ExtractedValueDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn answer_question_handler<C, A>(
    State(state): State<AppState<C, A>>,
    Json(request): Json<AnswerRequest>,
) -> impl IntoResponse
where
    C: ClassifierClient + 'static,
    A: ArchiveStore + 'static,
{
    match state
        .intake_service
        .submit_answer(&request.file_id, &request.question_id, &request.answer)
        .await
    {
        Ok(outcome) => {
            tracing::debug!(
                session_id = %request.file_id,
                question_id = %request.question_id,
                completed = outcome.completed,
                "Answer accepted"
            );
            (
                StatusCode::OK,
                Json(AnswerResponse {
                    next_question: outcome.next_question.map(QuestionDto::from),
                    completed: outcome.completed,
                    extracted_value: outcome.extracted_value.into(),
                    warning: outcome.warning,
                }),
            )
                .into_response()
        }
        Err(e) => intake_error_response(e),
    }
}
