use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;

use super::flow;
use super::outcome::ValidationOutcome;
use super::question::ValidationRule;

const MAX_DOC_TYPE_LENGTH: usize = 50;
const MAX_CLIENT_LENGTH: usize = 100;
/// Dates older than this are accepted with a non-blocking warning.
const OLD_DATE_WARNING_DAYS: i64 = 3650;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static CASE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+/\d{4}$").unwrap());
static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());
static MONTH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])$").unwrap());
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DMY_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})-(\d{2})-(\d{4})$").unwrap());
static SLASH_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap());

/// Apply the field's structural rule to an extracted value. `today` is
/// injected so date semantics stay deterministic under test.
pub fn validate(field_id: &str, value: &str, today: NaiveDate) -> ValidationOutcome {
    let rule = match flow::question(field_id) {
        Some(question) => question.rule,
        // Fields outside the graph (compound sub-fields) get the baseline rule.
        None => ValidationRule::MinLength(2),
    };
    validate_rule(rule, field_id, value, today)
}

pub fn validate_rule(
    rule: ValidationRule,
    field_id: &str,
    value: &str,
    today: NaiveDate,
) -> ValidationOutcome {
    let trimmed = value.trim();

    match rule {
        ValidationRule::Choice(choices) => {
            let normalized = trimmed.to_lowercase();
            if choices.contains(&normalized.as_str()) {
                accepted(normalized)
            } else {
                rejected(
                    format!(
                        "Respuesta inválida para '{}'. Opciones: {}",
                        field_id,
                        choices.join(", ")
                    ),
                    None,
                )
            }
        }
        ValidationRule::MinLength(min) => {
            if trimmed.chars().count() >= min {
                accepted(trimmed)
            } else {
                rejected(
                    format!("La respuesta debe tener mínimo {} caracteres", min),
                    None,
                )
            }
        }
        ValidationRule::Number => {
            if NUMBER.is_match(trimmed) {
                accepted(trimmed)
            } else {
                rejected("Debe ser un número (ej: 1, 2, 3)".to_string(), None)
            }
        }
        ValidationRule::CaseNumber => {
            if CASE_NUMBER.is_match(trimmed) {
                accepted(trimmed)
            } else {
                rejected(
                    "Formato inválido. Debe ser XXX/YYYY (ej: 455/2025)".to_string(),
                    None,
                )
            }
        }
        ValidationRule::Year => {
            if YEAR.is_match(trimmed) {
                accepted(trimmed)
            } else {
                rejected("Año inválido. Debe ser YYYY (ej: 2025)".to_string(), None)
            }
        }
        ValidationRule::Month => {
            if MONTH.is_match(trimmed) {
                accepted(trimmed)
            } else {
                rejected(
                    "Mes inválido. Debe ser MM (ej: 01, 06, 12)".to_string(),
                    None,
                )
            }
        }
        ValidationRule::Date => validate_date(trimmed, today),
        ValidationRule::DocType => validate_doc_type(trimmed),
        ValidationRule::ClientName => validate_client(trimmed),
    }
}

fn validate_date(value: &str, today: NaiveDate) -> ValidationOutcome {
    if !ISO_DATE.is_match(value) {
        return rejected(
            "Formato de fecha inválido. Usa YYYY-MM-DD (ejemplo: 2025-01-15)".to_string(),
            suggest_date(value),
        );
    }

    let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return rejected(
            "Fecha inválida. Verifica el día y mes (ejemplo: 2025-01-15)".to_string(),
            suggest_date(value),
        );
    };

    if parsed > today {
        return rejected(
            "La fecha no puede estar en el futuro. Usa una fecha de hoy o anterior.".to_string(),
            suggest_date(value),
        );
    }

    let warning = if parsed < today - Duration::days(OLD_DATE_WARNING_DAYS) {
        Some("La fecha es de hace más de 10 años. ¿Es correcto?".to_string())
    } else {
        None
    };

    ValidationOutcome::Accepted {
        value: value.to_string(),
        warning,
    }
}

fn validate_doc_type(value: &str) -> ValidationOutcome {
    let length = value.chars().count();
    if length < 2 {
        return rejected("El tipo debe tener mínimo 2 caracteres".to_string(), None);
    }
    if length > MAX_DOC_TYPE_LENGTH {
        return rejected(
            format!("El tipo debe tener máximo {} caracteres", MAX_DOC_TYPE_LENGTH),
            None,
        );
    }
    if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return rejected(
            "El tipo debe contener solo letras y espacios (sin números ni símbolos). Ejemplo: Factura"
                .to_string(),
            suggest_doc_type(value),
        );
    }
    accepted(value)
}

fn validate_client(value: &str) -> ValidationOutcome {
    let length = value.chars().count();
    if length < 2 {
        return rejected("El cliente debe tener mínimo 2 caracteres".to_string(), None);
    }
    if length > MAX_CLIENT_LENGTH {
        return rejected(
            format!("El cliente debe tener máximo {} caracteres", MAX_CLIENT_LENGTH),
            None,
        );
    }
    let allowed = value
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '.' || c == '-');
    if !allowed {
        return rejected(
            "El cliente solo puede contener letras, números, espacios, guiones y puntos. Ejemplo: Acme Corp."
                .to_string(),
            None,
        );
    }
    accepted(value)
}

/// Proposed correction for an invalid document type: drop everything outside
/// letters and spaces.
pub fn suggest_doc_type(invalid: &str) -> Option<String> {
    let cleaned: String = invalid
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.chars().count() >= 2 {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// Proposed ISO form for common date-shape mistakes (DD-MM-YYYY, MM/DD/YYYY,
/// DD/MM/YYYY); each candidate must be a real calendar date.
pub fn suggest_date(invalid: &str) -> Option<String> {
    if let Some(caps) = DMY_DASH.captures(invalid) {
        if let Some(iso) = real_date(&caps[3], &caps[2], &caps[1]) {
            return Some(iso);
        }
    }
    if let Some(caps) = SLASH_DATE.captures(invalid) {
        // US order first, then the European reading.
        if let Some(iso) = real_date(&caps[3], &caps[1], &caps[2]) {
            return Some(iso);
        }
        if let Some(iso) = real_date(&caps[3], &caps[2], &caps[1]) {
            return Some(iso);
        }
    }
    None
}

fn real_date(year: &str, month: &str, day: &str) -> Option<String> {
    let year_num: i32 = year.parse().ok()?;
    let month_num: u32 = month.parse().ok()?;
    let day_num: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year_num, month_num, day_num)?;
    Some(format!("{}-{}-{}", year, month, day))
}

fn accepted(value: impl Into<String>) -> ValidationOutcome {
    ValidationOutcome::Accepted {
        value: value.into(),
        warning: None,
    }
}

fn rejected(error: String, suggestion: Option<String>) -> ValidationOutcome {
    ValidationOutcome::Rejected { error, suggestion }
}
