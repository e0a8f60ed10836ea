use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{
    ClassifierClient, ClassifierError, SessionStore, SessionStoreError,
};
use crate::domain::flow::{self, FlowError};
use crate::domain::synthesis::{self, SynthesisError};
use crate::domain::validation;
use crate::domain::{
    ExtractedValue, ExtractionOutcome, FolderPlan, QuestionSpec, Session, ValidationOutcome,
};

use super::extraction::ExtractionService;

/// Orchestrates one questionnaire session: extraction, validation, flow
/// advancement and final path synthesis. A rejected, ambiguous or failed
/// answer leaves the stored session untouched, so the same question is simply
/// asked again.
pub struct IntakeService<C>
where
    C: ClassifierClient,
{
    sessions: Arc<dyn SessionStore>,
    extraction: ExtractionService<C>,
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub next_question: Option<&'static QuestionSpec>,
    pub completed: bool,
    pub extracted_value: ExtractedValue,
    pub warning: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The user can fix this by resubmitting; the session was not changed.
    #[error("{message}")]
    UserCorrectable {
        field: String,
        message: String,
        suggestion: Option<String>,
    },
    #[error("faltan campos obligatorios: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("sesión no encontrada")]
    SessionNotFound,
    #[error("classifier unavailable: {0}")]
    Upstream(#[from] ClassifierError),
    #[error("session store unavailable: {0}")]
    Store(#[from] SessionStoreError),
    /// Defect in the static question tables, never a user error.
    #[error("question flow misconfigured: {0}")]
    Configuration(#[from] FlowError),
}

impl<C> IntakeService<C>
where
    C: ClassifierClient,
{
    pub fn new(sessions: Arc<dyn SessionStore>, classifier: Arc<C>) -> Self {
        Self {
            sessions,
            extraction: ExtractionService::new(classifier),
        }
    }

    /// Create (or reset) the session and hand back the root question.
    pub async fn start_session(
        &self,
        session_id: &str,
    ) -> Result<&'static QuestionSpec, IntakeError> {
        self.sessions.put(Session::new(session_id)).await?;
        Ok(flow::first_question())
    }

    #[tracing::instrument(skip(self, raw))]
    pub async fn submit_answer(
        &self,
        session_id: &str,
        question_id: &str,
        raw: &str,
    ) -> Result<SubmitOutcome, IntakeError> {
        let mut session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(IntakeError::SessionNotFound)?;

        if flow::question(question_id).is_none() {
            return Err(IntakeError::UserCorrectable {
                field: question_id.to_string(),
                message: format!("pregunta desconocida: {question_id}"),
                suggestion: None,
            });
        }

        let outcome = self.extraction.extract(question_id, raw).await?;
        let extracted = match outcome {
            ExtractionOutcome::Extracted(value) => value,
            ExtractionOutcome::Ambiguous => {
                tracing::debug!(question_id, "classifier returned the ambiguity sentinel");
                return Err(IntakeError::UserCorrectable {
                    field: question_id.to_string(),
                    message: clarification_message(question_id).to_string(),
                    suggestion: None,
                });
            }
            ExtractionOutcome::Failed(reason) => {
                return Err(IntakeError::UserCorrectable {
                    field: question_id.to_string(),
                    message: reason,
                    suggestion: None,
                });
            }
        };

        let today = Utc::now().date_naive();
        let mut warning = None;
        let (recorded, routing_id) = match extracted {
            ExtractedValue::Scalar(value) => {
                match validation::validate(question_id, &value, today) {
                    ValidationOutcome::Accepted {
                        value,
                        warning: date_warning,
                    } => {
                        warning = date_warning;
                        session.record(question_id, &value);
                        (ExtractedValue::Scalar(value), question_id)
                    }
                    ValidationOutcome::Rejected { error, suggestion } => {
                        return Err(IntakeError::UserCorrectable {
                            field: question_id.to_string(),
                            message: error,
                            suggestion,
                        });
                    }
                }
            }
            // The compound parties answer fills both fields in one step, so
            // the flow advances from the second one.
            ExtractedValue::Parties { party_a, party_b } => {
                session.record_parties(&party_a, &party_b);
                (ExtractedValue::Parties { party_a, party_b }, "parte_b")
            }
        };

        let next_question = flow::next_question(routing_id, &session.answers)?;
        if let Some(next) = next_question {
            session.current_question_id = next.id.to_string();
        }
        let completed = next_question.is_none();
        self.sessions.put(session).await?;

        Ok(SubmitOutcome {
            next_question,
            completed,
            extracted_value: recorded,
            warning,
        })
    }

    /// Synthesize the folder plan for a completed session. The session is kept
    /// until the document is archived or the caller discards it.
    pub async fn finalize(
        &self,
        session_id: &str,
        extension: &str,
    ) -> Result<FolderPlan, IntakeError> {
        let session = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(IntakeError::SessionNotFound)?;

        let Some(work_type) = session.work_type() else {
            let field = if session.answers.contains_key("categoria") {
                "tipo_trabajo"
            } else {
                "categoria"
            };
            return Err(IntakeError::MissingFields(vec![field.to_string()]));
        };

        let client = session.answers.get("client").map(String::as_str).unwrap_or("");
        synthesis::synthesize(work_type, client, &session.answers, extension).map_err(
            |SynthesisError::MissingFields(fields)| IntakeError::MissingFields(fields),
        )
    }

    pub async fn discard(&self, session_id: &str) -> Result<(), IntakeError> {
        self.sessions.delete(session_id).await?;
        Ok(())
    }

    pub async fn session(&self, session_id: &str) -> Result<Session, IntakeError> {
        self.sessions
            .get(session_id)
            .await?
            .ok_or(IntakeError::SessionNotFound)
    }
}

/// Field-specific re-ask message for an ambiguous classifier reply.
fn clarification_message(field_id: &str) -> &'static str {
    match field_id {
        "tipo_trabajo" => {
            "No he podido determinar si es un procedimiento judicial o un proyecto jurídico. \
             Por favor, responde: procedimiento o proyecto."
        }
        "client" => {
            "No he podido identificar el nombre del cliente. Por favor, escribe solo el nombre."
        }
        "doc_type_proc" | "doc_type_proyecto" => {
            "No he podido identificar el tipo de documento. Por favor, indícalo de forma más \
             concreta (ej: Demanda, Sentencia, Informe)."
        }
        _ => "No se ha entendido la respuesta. Por favor, reformúlala.",
    }
}
