use std::collections::BTreeMap;

use super::question::{ConditionalNext, NextStep, QuestionSpec, ValidationRule};
use super::work_type::WorkType;

/// The full question graph: one root, a legal sub-root branching into two
/// linear chains on `tipo_trabajo`, and a linear insurance chain.
pub static QUESTIONS: &[QuestionSpec] = &[
    QuestionSpec {
        id: "categoria",
        prompt: "¿El documento pertenece al área legal o a seguros? (escribe: legal o seguros)",
        required: true,
        rule: ValidationRule::Choice(&["legal", "seguros"]),
        next: NextStep::Conditional(&[ConditionalNext {
            field: "categoria",
            routes: &[("legal", "tipo_trabajo"), ("seguros", "compania")],
        }]),
        flow: None,
    },
    QuestionSpec {
        id: "tipo_trabajo",
        prompt: "¿Es un Procedimiento Judicial o un Proyecto Jurídico? (escribe: procedimiento o proyecto)",
        required: true,
        rule: ValidationRule::Choice(&["procedimiento", "proyecto"]),
        next: NextStep::Static("client"),
        flow: None,
    },
    QuestionSpec {
        id: "client",
        prompt: "¿Cuál es el nombre del cliente? (ej: GRUPO GORETTI, JJ. TEALQUILA Y GESTIONA SL)",
        required: true,
        rule: ValidationRule::ClientName,
        next: NextStep::Conditional(&[ConditionalNext {
            field: "tipo_trabajo",
            routes: &[("procedimiento", "jurisdiccion"), ("proyecto", "proyecto_year")],
        }]),
        flow: None,
    },
    // Procedimiento judicial chain
    QuestionSpec {
        id: "jurisdiccion",
        prompt: "¿Qué tipo de juzgado es? (contencioso, social, civil, penal, instrucción)",
        required: true,
        rule: ValidationRule::Choice(&[
            "contencioso",
            "social",
            "civil",
            "penal",
            "instrucción",
            "instruccion",
        ]),
        next: NextStep::Static("juzgado_num"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "juzgado_num",
        prompt: "¿Número del juzgado? (ej: 1, 2, 3)",
        required: true,
        rule: ValidationRule::Number,
        next: NextStep::Static("demarcacion"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "demarcacion",
        prompt: "¿Demarcación del juzgado? (ej: Santa Cruz, Tenerife, La Gomera)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("num_procedimiento"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "num_procedimiento",
        prompt: "¿Número de procedimiento/autos? (ej: 455/2025, 245/2025)",
        required: true,
        rule: ValidationRule::CaseNumber,
        next: NextStep::Static("fecha_procedimiento"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "fecha_procedimiento",
        prompt: "¿Fecha del procedimiento? (formato: YYYY-MM-DD)",
        required: true,
        rule: ValidationRule::Date,
        next: NextStep::Static("parte_a"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "parte_a",
        prompt: "¿Nombre de la parte actora/demandante? (ej: Pedro Perez, Ministerio Fiscal)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("parte_b"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "parte_b",
        prompt: "¿Nombre de la parte demandada? (ej: Cabildo Gomera, Motor 7 Islas)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("materia_proc"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "materia_proc",
        prompt: "¿Materia del procedimiento? (ej: Despidos, Fijeza, Urbanismo, Art316CP)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("doc_type_proc"),
        flow: Some(WorkType::Procedimiento),
    },
    QuestionSpec {
        id: "doc_type_proc",
        prompt: "¿Tipo de documento? (ej: Escrito, Sentencia, Pericial, Notificación)",
        required: true,
        rule: ValidationRule::DocType,
        next: NextStep::End,
        flow: Some(WorkType::Procedimiento),
    },
    // Proyecto jurídico chain
    QuestionSpec {
        id: "proyecto_year",
        prompt: "¿Año del proyecto? (formato: YYYY)",
        required: true,
        rule: ValidationRule::Year,
        next: NextStep::Static("proyecto_month"),
        flow: Some(WorkType::Proyecto),
    },
    QuestionSpec {
        id: "proyecto_month",
        prompt: "¿Mes del proyecto? (formato: MM, ej: 01, 06, 12)",
        required: true,
        rule: ValidationRule::Month,
        next: NextStep::Static("proyecto_nombre"),
        flow: Some(WorkType::Proyecto),
    },
    QuestionSpec {
        id: "proyecto_nombre",
        prompt: "¿Nombre del proyecto? (ej: Informe, Dictamen, Estudio)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("proyecto_materia"),
        flow: Some(WorkType::Proyecto),
    },
    QuestionSpec {
        id: "proyecto_materia",
        prompt: "¿Materia del proyecto? (ej: Seguro Salud, Urbanismo, Laboral)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("doc_type_proyecto"),
        flow: Some(WorkType::Proyecto),
    },
    QuestionSpec {
        id: "doc_type_proyecto",
        prompt: "¿Tipo de documento? (ej: Informe, Borrador, Contrato, Comunicación)",
        required: true,
        rule: ValidationRule::DocType,
        next: NextStep::End,
        flow: Some(WorkType::Proyecto),
    },
    // Seguros chain
    QuestionSpec {
        id: "compania",
        prompt: "¿Compañía aseguradora? (ej: Mapfre, AXA)",
        required: true,
        rule: ValidationRule::ClientName,
        next: NextStep::Static("tomador"),
        flow: Some(WorkType::Seguro),
    },
    QuestionSpec {
        id: "tomador",
        prompt: "¿Nombre del tomador del seguro?",
        required: true,
        rule: ValidationRule::ClientName,
        next: NextStep::Static("ramo"),
        flow: Some(WorkType::Seguro),
    },
    QuestionSpec {
        id: "ramo",
        prompt: "¿Ramo del seguro? (ej: salud, auto, hogar)",
        required: true,
        rule: ValidationRule::MinLength(2),
        next: NextStep::Static("tipo_seguro"),
        flow: Some(WorkType::Seguro),
    },
    QuestionSpec {
        id: "tipo_seguro",
        prompt: "¿Tipo de documento de seguro? (poliza, siniestro, comunicacion, otro)",
        required: true,
        rule: ValidationRule::Choice(&[
            "poliza",
            "póliza",
            "siniestro",
            "comunicacion",
            "comunicación",
            "otro",
        ]),
        next: NextStep::Static("fecha_seguro"),
        flow: Some(WorkType::Seguro),
    },
    QuestionSpec {
        id: "fecha_seguro",
        prompt: "¿Fecha del documento? (formato: YYYY-MM-DD)",
        required: true,
        rule: ValidationRule::Date,
        next: NextStep::Static("doc_type_seguro"),
        flow: Some(WorkType::Seguro),
    },
    QuestionSpec {
        id: "doc_type_seguro",
        prompt: "¿Descripción del documento? (ej: Poliza salud, Parte siniestro)",
        required: true,
        rule: ValidationRule::DocType,
        next: NextStep::End,
        flow: Some(WorkType::Seguro),
    },
];

const PROCEDIMIENTO_FIELDS: &[&str] = &[
    "client",
    "jurisdiccion",
    "juzgado_num",
    "demarcacion",
    "num_procedimiento",
    "fecha_procedimiento",
    "parte_a",
    "parte_b",
    "materia_proc",
    "doc_type_proc",
];

const PROYECTO_FIELDS: &[&str] = &[
    "client",
    "proyecto_year",
    "proyecto_month",
    "proyecto_nombre",
    "proyecto_materia",
    "doc_type_proyecto",
];

const SEGURO_FIELDS: &[&str] = &[
    "compania",
    "tomador",
    "ramo",
    "tipo_seguro",
    "fecha_seguro",
    "doc_type_seguro",
];

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("unknown question id: {0}")]
    UnknownQuestion(String),
    #[error("question '{0}' has a conditional table with no matching route and no fallback")]
    StuckFlow(&'static str),
    #[error("question '{0}' references undefined successor '{1}'")]
    DanglingNext(&'static str, &'static str),
}

pub fn question(id: &str) -> Option<&'static QuestionSpec> {
    QUESTIONS.iter().find(|q| q.id == id)
}

pub fn first_question() -> &'static QuestionSpec {
    &QUESTIONS[0]
}

/// Compute the successor of `current_id` given the answers collected so far.
/// `Ok(None)` signals flow completion. A conditional table whose governing
/// field is not yet answered counts as "no match"; a conditional question with
/// no matching route is a defect in the static tables, not a user error.
pub fn next_question(
    current_id: &str,
    answers: &BTreeMap<String, String>,
) -> Result<Option<&'static QuestionSpec>, FlowError> {
    let current =
        question(current_id).ok_or_else(|| FlowError::UnknownQuestion(current_id.to_string()))?;

    match current.next {
        NextStep::End => Ok(None),
        NextStep::Static(next_id) => question(next_id)
            .map(Some)
            .ok_or(FlowError::DanglingNext(current.id, next_id)),
        NextStep::Conditional(tables) => {
            for table in tables {
                let Some(answer) = answers.get(table.field) else {
                    continue;
                };
                let normalized = answer.trim().to_lowercase();
                if let Some((_, next_id)) =
                    table.routes.iter().find(|(value, _)| *value == normalized)
                {
                    return question(next_id)
                        .map(Some)
                        .ok_or(FlowError::DanglingNext(current.id, next_id));
                }
            }
            Err(FlowError::StuckFlow(current.id))
        }
    }
}

pub fn is_terminal(id: &str) -> bool {
    question(id).map(|q| q.is_terminal()).unwrap_or(false)
}

/// Fixed per-flow checklist of fields the synthesizer requires.
pub fn required_fields(work_type: WorkType) -> &'static [&'static str] {
    match work_type {
        WorkType::Procedimiento => PROCEDIMIENTO_FIELDS,
        WorkType::Proyecto => PROYECTO_FIELDS,
        WorkType::Seguro => SEGURO_FIELDS,
    }
}

/// Fields from the work type's checklist that are absent or empty, in
/// checklist order.
pub fn missing_fields(work_type: WorkType, answers: &BTreeMap<String, String>) -> Vec<String> {
    required_fields(work_type)
        .iter()
        .filter(|field| {
            answers
                .get(**field)
                .map(|v| v.trim().is_empty())
                .unwrap_or(true)
        })
        .map(|field| field.to_string())
        .collect()
}
