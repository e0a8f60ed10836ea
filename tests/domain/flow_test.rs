use std::collections::BTreeMap;

use archivador::domain::flow::{
    self, QUESTIONS, first_question, is_terminal, missing_fields, next_question,
};
use archivador::domain::{FlowError, NextStep, WorkType};

fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn given_question_graph_when_checking_every_successor_then_all_ids_resolve() {
    for question in QUESTIONS {
        match question.next {
            NextStep::End => {}
            NextStep::Static(next_id) => {
                assert!(
                    flow::question(next_id).is_some(),
                    "question '{}' points at unknown '{}'",
                    question.id,
                    next_id
                );
            }
            NextStep::Conditional(tables) => {
                for table in tables {
                    for (_, next_id) in table.routes {
                        assert!(
                            flow::question(next_id).is_some(),
                            "question '{}' routes to unknown '{}'",
                            question.id,
                            next_id
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn given_root_question_when_answered_legal_then_routes_to_work_type() {
    assert_eq!(first_question().id, "categoria");

    let next = next_question("categoria", &answers(&[("categoria", "legal")]))
        .unwrap()
        .unwrap();
    assert_eq!(next.id, "tipo_trabajo");
}

#[test]
fn given_root_question_when_answered_seguros_then_routes_to_insurance_chain() {
    let next = next_question("categoria", &answers(&[("categoria", "seguros")]))
        .unwrap()
        .unwrap();
    assert_eq!(next.id, "compania");
}

#[test]
fn given_client_answered_when_work_type_is_procedimiento_then_judicial_chain_starts() {
    let collected = answers(&[("categoria", "legal"), ("tipo_trabajo", "procedimiento")]);
    let next = next_question("client", &collected).unwrap().unwrap();
    assert_eq!(next.id, "jurisdiccion");
}

#[test]
fn given_conditional_answer_with_case_and_spacing_noise_when_routing_then_still_matches() {
    let next = next_question("categoria", &answers(&[("categoria", "  Legal ")]))
        .unwrap()
        .unwrap();
    assert_eq!(next.id, "tipo_trabajo");
}

#[test]
fn given_missing_governing_field_when_routing_then_error_not_panic() {
    let result = next_question("client", &answers(&[]));
    assert!(matches!(result, Err(FlowError::StuckFlow("client"))));
}

#[test]
fn given_unknown_question_id_when_routing_then_error() {
    let result = next_question("no_such_question", &answers(&[]));
    assert!(matches!(result, Err(FlowError::UnknownQuestion(_))));
}

#[test]
fn given_terminal_questions_when_advancing_then_flow_completes() {
    for id in ["doc_type_proc", "doc_type_proyecto", "doc_type_seguro"] {
        assert!(is_terminal(id), "'{}' should be terminal", id);
        assert!(next_question(id, &answers(&[])).unwrap().is_none());
    }
    assert!(!is_terminal("categoria"));
}

#[test]
fn given_full_procedimiento_walk_when_following_static_links_then_nine_questions() {
    let collected = answers(&[("categoria", "legal"), ("tipo_trabajo", "procedimiento")]);

    let mut current = "client".to_string();
    let mut visited = Vec::new();
    while let Some(next) = next_question(&current, &collected).unwrap() {
        visited.push(next.id);
        current = next.id.to_string();
    }
    assert_eq!(
        visited,
        vec![
            "jurisdiccion",
            "juzgado_num",
            "demarcacion",
            "num_procedimiento",
            "fecha_procedimiento",
            "parte_a",
            "parte_b",
            "materia_proc",
            "doc_type_proc",
        ]
    );
}

#[test]
fn given_no_answers_when_listing_missing_fields_then_checklist_order() {
    let missing = missing_fields(WorkType::Proyecto, &answers(&[]));
    assert_eq!(
        missing,
        vec![
            "client",
            "proyecto_year",
            "proyecto_month",
            "proyecto_nombre",
            "proyecto_materia",
            "doc_type_proyecto",
        ]
    );
}

#[test]
fn given_empty_answer_value_when_listing_missing_fields_then_counts_as_missing() {
    let collected = answers(&[("compania", "  "), ("tomador", "Juan")]);
    let missing = missing_fields(WorkType::Seguro, &collected);
    assert!(missing.contains(&"compania".to_string()));
    assert!(!missing.contains(&"tomador".to_string()));
}
