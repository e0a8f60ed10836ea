use std::collections::BTreeMap;

use archivador::domain::synthesis::synthesize;
use archivador::domain::{SynthesisError, WorkType};

fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn procedimiento_answers() -> BTreeMap<String, String> {
    answers(&[
        ("client", "Acme SL"),
        ("jurisdiccion", "social"),
        ("juzgado_num", "2"),
        ("demarcacion", "Tenerife"),
        ("num_procedimiento", "455/2025"),
        ("fecha_procedimiento", "2025-05-12"),
        ("parte_a", "Pedro Perez"),
        ("parte_b", "Cabildo Gomera"),
        ("materia_proc", "Despidos"),
        ("doc_type_proc", "Escrito"),
    ])
}

#[test]
fn given_complete_procedimiento_when_synthesizing_then_expected_base_path() {
    let plan = synthesize(
        WorkType::Procedimiento,
        "Acme SL",
        &procedimiento_answers(),
        ".pdf",
    )
    .unwrap();

    assert_eq!(
        plan.base_path,
        "/Acme_SL/1. Procedimientos Judiciales/2025_05_SC2_Tenerife_455/\
         2025_Pedro_Perez Vs Cabildo_Gomera_Despidos"
    );
    assert_eq!(plan.target_subfolder, "01. Escritos presentados");
    assert_eq!(plan.canonical_filename, "2025-05-12_Escrito.pdf");
    assert_eq!(
        plan.full_path,
        format!("{}/01. Escritos presentados", plan.base_path)
    );
}

#[test]
fn given_procedimiento_plan_when_listing_folders_then_parents_plus_thirteen_subfolders() {
    let plan = synthesize(
        WorkType::Procedimiento,
        "Acme SL",
        &procedimiento_answers(),
        ".pdf",
    )
    .unwrap();

    assert_eq!(plan.standard_folders.len(), 16);
    assert_eq!(plan.standard_folders[0], "/Acme_SL");
    assert_eq!(
        plan.standard_folders[1],
        "/Acme_SL/1. Procedimientos Judiciales"
    );
    assert_eq!(plan.standard_folders[2], plan.base_path);
    assert!(plan
        .standard_folders
        .contains(&format!("{}/03.2 Pericial", plan.base_path)));
    assert!(plan
        .standard_folders
        .contains(&format!("{}/10. Costas y gastos", plan.base_path)));
}

#[test]
fn given_same_answers_when_synthesizing_twice_then_plans_identical() {
    let collected = procedimiento_answers();
    let first = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap();
    let second = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap();
    assert_eq!(first, second);
}

#[test]
fn given_complete_proyecto_when_synthesizing_then_expected_project_folder() {
    let collected = answers(&[
        ("client", "Ayto La Laguna"),
        ("proyecto_year", "2025"),
        ("proyecto_month", "08"),
        ("proyecto_nombre", "Informe"),
        ("proyecto_materia", "Derecho Laboral"),
        ("doc_type_proyecto", "Informe pericial"),
    ]);

    let plan = synthesize(WorkType::Proyecto, "Ayto La Laguna", &collected, ".pdf").unwrap();

    assert_eq!(
        plan.base_path,
        "/Ayto_La_Laguna/2. Proyectos Jurídicos/2025_08_Ayto_La_Laguna_Informe_Derecho_Laboral"
    );
    // An expert report is the project's final deliverable.
    assert_eq!(plan.target_subfolder, "05. Informe/Documento final");
    assert_eq!(plan.canonical_filename, "2025_08_Informe_pericial.pdf");
    assert_eq!(plan.standard_folders.len(), 11);
}

#[test]
fn given_missing_subject_matter_when_synthesizing_then_exactly_that_field_reported() {
    let mut collected = procedimiento_answers();
    collected.remove("materia_proc");

    let error = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap_err();
    let SynthesisError::MissingFields(fields) = error;
    assert_eq!(fields, vec!["materia_proc".to_string()]);
}

#[test]
fn given_empty_client_when_synthesizing_then_client_reported_first() {
    let mut collected = procedimiento_answers();
    collected.remove("client");
    collected.remove("materia_proc");

    let SynthesisError::MissingFields(fields) =
        synthesize(WorkType::Procedimiento, "", &collected, ".pdf").unwrap_err();
    assert_eq!(
        fields,
        vec!["client".to_string(), "materia_proc".to_string()]
    );
}

#[test]
fn given_unknown_jurisdiction_when_synthesizing_then_three_letter_fallback_code() {
    let mut collected = procedimiento_answers();
    collected.insert("jurisdiccion".to_string(), "mercantil".to_string());

    let plan = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap();
    assert!(plan.base_path.contains("2025_05_MER2_Tenerife_455"));
}

#[test]
fn given_unmapped_doc_type_when_synthesizing_then_quick_intake_subfolder() {
    let mut collected = procedimiento_answers();
    collected.insert("doc_type_proc".to_string(), "Recurso de amparo".to_string());

    let plan = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap();
    assert_eq!(
        plan.target_subfolder,
        "08. Carpeta 0 – Almacenamiento rápido"
    );
}

#[test]
fn given_case_number_without_year_when_synthesizing_then_fecha_year_used() {
    let mut collected = procedimiento_answers();
    collected.insert("num_procedimiento".to_string(), "455".to_string());

    let plan = synthesize(WorkType::Procedimiento, "Acme SL", &collected, ".pdf").unwrap();
    assert!(plan.base_path.contains("2025_05_SC2_Tenerife_455/2025_Pedro_Perez"));
}

#[test]
fn given_complete_seguro_when_synthesizing_then_insurance_tree() {
    let collected = answers(&[
        ("compania", "Mapfre"),
        ("tomador", "Juan Perez"),
        ("ramo", "salud"),
        ("tipo_seguro", "poliza"),
        ("fecha_seguro", "2025-03-01"),
        ("doc_type_seguro", "Poliza salud"),
    ]);

    let plan = synthesize(WorkType::Seguro, "", &collected, ".pdf").unwrap();

    assert_eq!(plan.base_path, "/Seguros/Mapfre/salud/Juan_Perez/2025");
    assert_eq!(plan.target_subfolder, "01. Pólizas");
    assert_eq!(plan.canonical_filename, "2025-03-01_Poliza_salud.pdf");
    assert_eq!(plan.standard_folders.len(), 9);
    assert_eq!(plan.standard_folders[0], "/Seguros");
}
