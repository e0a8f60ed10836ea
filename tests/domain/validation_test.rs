use chrono::{Duration, NaiveDate};

use archivador::domain::ValidationOutcome;
use archivador::domain::validation::{suggest_date, suggest_doc_type, validate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[test]
fn given_todays_date_when_validating_then_accepted_without_warning() {
    let outcome = validate("fecha_procedimiento", &iso(today()), today());
    assert_eq!(
        outcome,
        ValidationOutcome::Accepted {
            value: iso(today()),
            warning: None,
        }
    );
}

#[test]
fn given_tomorrows_date_when_validating_then_rejected() {
    let tomorrow = iso(today() + Duration::days(1));
    let outcome = validate("fecha_procedimiento", &tomorrow, today());
    assert!(matches!(outcome, ValidationOutcome::Rejected { .. }));
}

#[test]
fn given_date_just_over_ten_years_old_when_validating_then_accepted_with_warning() {
    let old = iso(today() - Duration::days(3651));
    match validate("fecha_procedimiento", &old, today()) {
        ValidationOutcome::Accepted { warning, .. } => assert!(warning.is_some()),
        other => panic!("expected acceptance with warning, got {:?}", other),
    }
}

#[test]
fn given_nine_year_old_date_when_validating_then_accepted_clean() {
    let recent = iso(today() - Duration::days(9 * 365));
    match validate("fecha_procedimiento", &recent, today()) {
        ValidationOutcome::Accepted { warning, .. } => assert!(warning.is_none()),
        other => panic!("expected clean acceptance, got {:?}", other),
    }
}

#[test]
fn given_impossible_calendar_date_when_validating_then_rejected() {
    let outcome = validate("fecha_procedimiento", "2025-02-30", today());
    assert!(matches!(outcome, ValidationOutcome::Rejected { .. }));
}

#[test]
fn given_day_first_date_when_rejected_then_iso_suggestion_attached() {
    match validate("fecha_procedimiento", "15-01-2025", today()) {
        ValidationOutcome::Rejected { suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("2025-01-15"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn given_slash_dates_when_suggesting_then_us_order_tried_first() {
    assert_eq!(suggest_date("01/15/2025").as_deref(), Some("2025-01-15"));
    // US reading is impossible here, so the European one wins.
    assert_eq!(suggest_date("13/05/2025").as_deref(), Some("2025-05-13"));
    assert_eq!(suggest_date("garbage"), None);
}

#[test]
fn given_choice_answer_with_casing_when_validating_then_normalized_lowercase() {
    let outcome = validate("categoria", "  Legal ", today());
    assert_eq!(
        outcome,
        ValidationOutcome::Accepted {
            value: "legal".to_string(),
            warning: None,
        }
    );
}

#[test]
fn given_choice_answer_outside_options_when_validating_then_rejected() {
    let outcome = validate("categoria", "fiscal", today());
    assert!(matches!(outcome, ValidationOutcome::Rejected { .. }));
}

#[test]
fn given_malformed_case_number_when_validating_then_rejected() {
    assert!(matches!(
        validate("num_procedimiento", "455-2025", today()),
        ValidationOutcome::Rejected { .. }
    ));
    assert!(matches!(
        validate("num_procedimiento", "455/2025", today()),
        ValidationOutcome::Accepted { .. }
    ));
}

#[test]
fn given_doc_type_with_digits_when_validating_then_rejected_with_suggestion() {
    match validate("doc_type_proc", "Factura 2025", today()) {
        ValidationOutcome::Rejected { suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("Factura"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn given_unsalvageable_doc_type_when_suggesting_then_none() {
    assert_eq!(suggest_doc_type("12345"), None);
}

#[test]
fn given_client_name_with_forbidden_symbol_when_validating_then_rejected() {
    assert!(matches!(
        validate("client", "Acme@Corp", today()),
        ValidationOutcome::Rejected { .. }
    ));
    assert!(matches!(
        validate("client", "J.J. Tealquila S.L.", today()),
        ValidationOutcome::Accepted { .. }
    ));
}

#[test]
fn given_month_rule_when_validating_then_only_zero_padded_months_pass() {
    assert!(matches!(
        validate("proyecto_month", "08", today()),
        ValidationOutcome::Accepted { .. }
    ));
    assert!(matches!(
        validate("proyecto_month", "13", today()),
        ValidationOutcome::Rejected { .. }
    ));
}
