use std::collections::BTreeMap;

use super::flow;
use super::work_type::WorkType;

/// Per-document questionnaire state. Sessions are independent by id; the
/// caller serializes answer submissions for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub current_question_id: String,
    pub answers: BTreeMap<String, String>,
    pub extracted_answers: BTreeMap<String, String>,
}

impl Session {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            current_question_id: flow::first_question().id.to_string(),
            answers: BTreeMap::new(),
            extracted_answers: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, field: &str, value: &str) {
        self.answers.insert(field.to_string(), value.to_string());
        self.extracted_answers
            .insert(field.to_string(), value.to_string());
    }

    /// The compound "partes" answer writes both derived fields in one step.
    pub fn record_parties(&mut self, party_a: &str, party_b: &str) {
        self.record("parte_a", party_a);
        self.record("parte_b", party_b);
    }

    /// Work type selected by the branching answers, if already collected.
    pub fn work_type(&self) -> Option<WorkType> {
        if let Some(categoria) = self.answers.get("categoria") {
            if categoria.trim().to_lowercase() == "seguros" {
                return Some(WorkType::Seguro);
            }
        }
        self.answers
            .get("tipo_trabajo")
            .and_then(|v| WorkType::parse(v))
    }
}
