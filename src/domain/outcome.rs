/// Value produced by the extractor for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedValue {
    Scalar(String),
    Parties { party_a: String, party_b: String },
}

impl ExtractedValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Parties { .. } => None,
        }
    }
}

/// Outcome of extracting one field from free text. `Ambiguous` is a
/// user-correctable state, distinct from a hard failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Extracted(ExtractedValue),
    Ambiguous,
    Failed(String),
}

/// Outcome of validating one extracted value. Suggestions are advisory: the
/// caller must resubmit to apply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted {
        value: String,
        warning: Option<String>,
    },
    Rejected {
        error: String,
        suggestion: Option<String>,
    },
}
