use super::work_type::WorkType;

/// Structural rule attached to a question, applied by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Case-insensitive membership; accepted values are normalized to lowercase.
    Choice(&'static [&'static str]),
    MinLength(usize),
    /// Bare number, e.g. a court number.
    Number,
    /// `455/2025` style procedure number.
    CaseNumber,
    /// `YYYY`.
    Year,
    /// Two-digit month `01`..`12`.
    Month,
    /// ISO `YYYY-MM-DD`, a real calendar date, with semantic checks.
    Date,
    /// Letters and spaces only, 2-50 chars.
    DocType,
    /// Letters, digits, spaces, dots and hyphens, 2-100 chars.
    ClientName,
}

/// One conditional edge table: the governing field and its value -> successor map.
/// Lookup keys are the governing field's answer, lowercased and trimmed.
#[derive(Debug, Clone, Copy)]
pub struct ConditionalNext {
    pub field: &'static str,
    pub routes: &'static [(&'static str, &'static str)],
}

/// Successor of a question: a question owns either one static successor or a
/// conditional table, never both.
#[derive(Debug, Clone, Copy)]
pub enum NextStep {
    End,
    Static(&'static str),
    Conditional(&'static [ConditionalNext]),
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    pub required: bool,
    pub rule: ValidationRule,
    pub next: NextStep,
    pub flow: Option<WorkType>,
}

impl QuestionSpec {
    pub fn is_terminal(&self) -> bool {
        matches!(self.next, NextStep::End)
    }
}
