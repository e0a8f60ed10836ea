use std::sync::Arc;

use crate::application::ports::{ClassifierClient, ClassifierError, AMBIGUOUS_SENTINEL};
use crate::domain::patterns;
use crate::domain::{ExtractedValue, ExtractionOutcome};

use super::prompts;

/// Per-field extraction dispatch: AI-assisted fields go through the
/// classifier, legal pattern fields through the regex tables, everything else
/// passes through trimmed.
///
/// The two families fail differently on purpose: AI fields fail closed
/// (`Ambiguous` forces a re-ask) while pattern fields fail open with the
/// trimmed raw text or fixed placeholders, leaving validation to decide.
pub struct ExtractionService<C>
where
    C: ClassifierClient,
{
    classifier: Arc<C>,
}

impl<C> ExtractionService<C>
where
    C: ClassifierClient,
{
    pub fn new(classifier: Arc<C>) -> Self {
        Self { classifier }
    }

    /// Transport errors propagate as `Err`; every semantic outcome, including
    /// ambiguity and empty input, travels in `Ok`.
    pub async fn extract(
        &self,
        field_id: &str,
        raw: &str,
    ) -> Result<ExtractionOutcome, ClassifierError> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(ExtractionOutcome::Failed(
                "la respuesta está vacía".to_string(),
            ));
        }

        if let Some(prompt) = prompts::prompt_for(field_id, input) {
            let reply = self.classifier.classify(&prompt).await?;
            return Ok(interpret_reply(&reply));
        }

        if field_id == "partes" {
            let (party_a, party_b) = patterns::extract_partes(input);
            return Ok(ExtractionOutcome::Extracted(ExtractedValue::Parties {
                party_a,
                party_b,
            }));
        }

        // The first party question also accepts a compound "A vs B" answer;
        // a single name stays scalar and the second party is asked normally.
        if field_id == "parte_a" {
            if let Some((party_a, party_b)) = patterns::try_extract_partes(input) {
                return Ok(ExtractionOutcome::Extracted(ExtractedValue::Parties {
                    party_a,
                    party_b,
                }));
            }
        }

        Ok(ExtractionOutcome::Extracted(ExtractedValue::Scalar(
            pattern_value(field_id, input),
        )))
    }
}

/// First matching pattern wins; with no match the trimmed raw text goes
/// forward and the validator has the last word.
fn pattern_value(field_id: &str, input: &str) -> String {
    let matched = match field_id {
        "jurisdiccion" => patterns::extract_jurisdiccion(input),
        "juzgado_num" => patterns::extract_juzgado_num(input),
        "demarcacion" => patterns::extract_demarcacion(input),
        "num_procedimiento" => patterns::extract_num_procedimiento(input),
        "materia_proc" => patterns::extract_materia(input),
        "proyecto_year" => patterns::extract_proyecto_year(input),
        "proyecto_month" => patterns::extract_proyecto_month(input),
        "proyecto_nombre" => patterns::extract_proyecto_nombre(input),
        "proyecto_materia" => patterns::extract_proyecto_materia(input),
        _ => None,
    };
    matched.unwrap_or_else(|| input.to_string())
}

/// Single-line classifier reply: markdown emphasis and surrounding quotes
/// stripped, then the ambiguity sentinel checked case-insensitively.
fn interpret_reply(reply: &str) -> ExtractionOutcome {
    let cleaned = reply.replace('*', "");
    let cleaned = cleaned
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();

    if cleaned.is_empty() {
        return ExtractionOutcome::Failed(
            "el clasificador devolvió una respuesta vacía".to_string(),
        );
    }
    if cleaned.eq_ignore_ascii_case(AMBIGUOUS_SENTINEL) {
        return ExtractionOutcome::Ambiguous;
    }
    ExtractionOutcome::Extracted(ExtractedValue::Scalar(cleaned.to_string()))
}
