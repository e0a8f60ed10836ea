use std::sync::Arc;

use archivador::application::services::{IntakeError, IntakeService};
use archivador::domain::{ExtractedValue, Session};
use archivador::infrastructure::llm::MockClassifier;
use archivador::infrastructure::persistence::InMemorySessionStore;

fn service(replies: &[&str]) -> IntakeService<MockClassifier> {
    IntakeService::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(MockClassifier::with_replies(replies)),
    )
}

#[tokio::test]
async fn given_full_procedimiento_dialogue_when_finalizing_then_expected_plan() {
    // AI-assisted fields in order: tipo_trabajo, client, doc_type_proc.
    let intake = service(&["procedimiento", "Acme SL", "Escrito"]);

    let first = intake.start_session("s1").await.unwrap();
    assert_eq!(first.id, "categoria");

    let steps = [
        ("categoria", "legal", "tipo_trabajo"),
        ("tipo_trabajo", "Es un juicio", "client"),
        ("client", "El cliente es Acme SL", "jurisdiccion"),
        ("jurisdiccion", "Juzgado de lo Social", "juzgado_num"),
        ("juzgado_num", "2", "demarcacion"),
        ("demarcacion", "Tenerife", "num_procedimiento"),
        ("num_procedimiento", "455/2025", "fecha_procedimiento"),
        ("fecha_procedimiento", "2025-05-12", "parte_a"),
    ];
    for (question_id, answer, expected_next) in steps {
        let outcome = intake.submit_answer("s1", question_id, answer).await.unwrap();
        assert_eq!(
            outcome.next_question.unwrap().id,
            expected_next,
            "after answering '{}'",
            question_id
        );
        assert!(!outcome.completed);
    }

    // The compound parties answer fills both fields and skips the second
    // party question.
    let outcome = intake
        .submit_answer("s1", "parte_a", "Pedro Perez vs Cabildo Gomera")
        .await
        .unwrap();
    assert_eq!(
        outcome.extracted_value,
        ExtractedValue::Parties {
            party_a: "Pedro Perez".to_string(),
            party_b: "Cabildo Gomera".to_string(),
        }
    );
    assert_eq!(outcome.next_question.unwrap().id, "materia_proc");

    intake
        .submit_answer("s1", "materia_proc", "Despidos")
        .await
        .unwrap();
    let last = intake
        .submit_answer("s1", "doc_type_proc", "es un escrito")
        .await
        .unwrap();
    assert!(last.completed);
    assert!(last.next_question.is_none());

    let plan = intake.finalize("s1", ".pdf").await.unwrap();
    assert_eq!(
        plan.base_path,
        "/Acme_SL/1. Procedimientos Judiciales/2025_05_SC2_Tenerife_455/\
         2025_Pedro_Perez Vs Cabildo_Gomera_Despidos"
    );
    assert_eq!(plan.canonical_filename, "2025-05-12_Escrito.pdf");
}

#[tokio::test]
async fn given_single_party_name_when_submitting_then_second_party_still_asked() {
    let intake = service(&["procedimiento", "Acme SL"]);
    intake.start_session("s8").await.unwrap();
    for (question_id, answer) in [
        ("categoria", "legal"),
        ("tipo_trabajo", "Es un juicio"),
        ("client", "El cliente es Acme SL"),
        ("jurisdiccion", "social"),
        ("juzgado_num", "2"),
        ("demarcacion", "Tenerife"),
        ("num_procedimiento", "455/2025"),
        ("fecha_procedimiento", "2025-05-12"),
    ] {
        intake.submit_answer("s8", question_id, answer).await.unwrap();
    }

    // A plain name carries no separator: it is kept verbatim and the flow
    // moves on to the second party question instead of skipping it.
    let outcome = intake
        .submit_answer("s8", "parte_a", "Pedro Perez")
        .await
        .unwrap();
    assert_eq!(
        outcome.extracted_value,
        ExtractedValue::Scalar("Pedro Perez".to_string())
    );
    assert_eq!(outcome.next_question.unwrap().id, "parte_b");

    let outcome = intake
        .submit_answer("s8", "parte_b", "Cabildo Gomera")
        .await
        .unwrap();
    assert_eq!(outcome.next_question.unwrap().id, "materia_proc");

    let session = intake.session("s8").await.unwrap();
    assert_eq!(
        session.answers.get("parte_a").map(String::as_str),
        Some("Pedro Perez")
    );
    assert_eq!(
        session.answers.get("parte_b").map(String::as_str),
        Some("Cabildo Gomera")
    );
}

#[tokio::test]
async fn given_ambiguous_classifier_reply_when_submitting_then_session_unchanged() {
    let intake = service(&["AMBIGUO"]);
    intake.start_session("s2").await.unwrap();
    intake.submit_answer("s2", "categoria", "legal").await.unwrap();

    let error = intake
        .submit_answer("s2", "tipo_trabajo", "pues no sé")
        .await
        .unwrap_err();
    match error {
        IntakeError::UserCorrectable { field, .. } => assert_eq!(field, "tipo_trabajo"),
        other => panic!("expected user-correctable error, got {:?}", other),
    }

    // Same question is still pending and nothing was stored for it.
    let session = intake.session("s2").await.unwrap();
    assert_eq!(session.current_question_id, "tipo_trabajo");
    assert!(!session.answers.contains_key("tipo_trabajo"));
}

#[tokio::test]
async fn given_rejected_validation_when_submitting_then_suggestion_surfaces() {
    // The insurance chain reaches a date question without any AI fields.
    let intake = service(&[]);
    intake.start_session("s3").await.unwrap();
    intake.submit_answer("s3", "categoria", "seguros").await.unwrap();
    intake.submit_answer("s3", "compania", "Mapfre").await.unwrap();
    intake.submit_answer("s3", "tomador", "Juan Perez").await.unwrap();
    intake.submit_answer("s3", "ramo", "salud").await.unwrap();
    intake.submit_answer("s3", "tipo_seguro", "poliza").await.unwrap();

    let error = intake
        .submit_answer("s3", "fecha_seguro", "15-01-2025")
        .await
        .unwrap_err();
    match error {
        IntakeError::UserCorrectable { suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("2025-01-15"));
        }
        other => panic!("expected user-correctable error, got {:?}", other),
    }

    let session = intake.session("s3").await.unwrap();
    assert_eq!(session.current_question_id, "fecha_seguro");
}

#[tokio::test]
async fn given_session_missing_subject_when_finalizing_then_exactly_that_field() {
    let store = Arc::new(InMemorySessionStore::new());
    let intake: IntakeService<MockClassifier> = IntakeService::new(
        store.clone(),
        Arc::new(MockClassifier::with_replies(&[])),
    );

    let mut session = Session::new("s4");
    for (field, value) in [
        ("categoria", "legal"),
        ("tipo_trabajo", "procedimiento"),
        ("client", "Acme SL"),
        ("jurisdiccion", "social"),
        ("juzgado_num", "2"),
        ("demarcacion", "Tenerife"),
        ("num_procedimiento", "455/2025"),
        ("fecha_procedimiento", "2025-05-12"),
        ("parte_a", "Pedro Perez"),
        ("parte_b", "Cabildo Gomera"),
        ("doc_type_proc", "Escrito"),
    ] {
        session.record(field, value);
    }
    use archivador::application::ports::SessionStore;
    store.put(session).await.unwrap();

    let error = intake.finalize("s4", ".pdf").await.unwrap_err();
    match error {
        IntakeError::MissingFields(fields) => {
            assert_eq!(fields, vec!["materia_proc".to_string()]);
        }
        other => panic!("expected missing fields, got {:?}", other),
    }
}

#[tokio::test]
async fn given_discarded_session_when_submitting_then_not_found() {
    let intake = service(&[]);
    intake.start_session("s5").await.unwrap();
    intake.discard("s5").await.unwrap();

    let error = intake
        .submit_answer("s5", "categoria", "legal")
        .await
        .unwrap_err();
    assert!(matches!(error, IntakeError::SessionNotFound));
}

#[tokio::test]
async fn given_classifier_outage_when_submitting_then_upstream_error_and_session_kept() {
    // No scripted replies: the mock fails the way a dead endpoint would.
    let intake = service(&[]);
    intake.start_session("s6").await.unwrap();
    intake.submit_answer("s6", "categoria", "legal").await.unwrap();

    let error = intake
        .submit_answer("s6", "tipo_trabajo", "un juicio")
        .await
        .unwrap_err();
    assert!(matches!(error, IntakeError::Upstream(_)));

    let session = intake.session("s6").await.unwrap();
    assert_eq!(session.current_question_id, "tipo_trabajo");
}

#[tokio::test]
async fn given_date_beyond_warning_window_when_submitting_then_accepted_with_warning() {
    let intake = service(&[]);
    intake.start_session("s7").await.unwrap();
    intake.submit_answer("s7", "categoria", "seguros").await.unwrap();
    intake.submit_answer("s7", "compania", "AXA").await.unwrap();
    intake.submit_answer("s7", "tomador", "Juan Perez").await.unwrap();
    intake.submit_answer("s7", "ramo", "hogar").await.unwrap();
    intake.submit_answer("s7", "tipo_seguro", "siniestro").await.unwrap();

    let outcome = intake
        .submit_answer("s7", "fecha_seguro", "2001-06-15")
        .await
        .unwrap();
    assert!(outcome.warning.is_some());
    assert_eq!(outcome.next_question.unwrap().id, "doc_type_seguro");
}
