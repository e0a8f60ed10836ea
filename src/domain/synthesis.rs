use std::collections::BTreeMap;

use super::flow;
use super::folder_plan::FolderPlan;
use super::sanitize::sanitize_filename_part;
use super::work_type::WorkType;

const PROCEDIMIENTOS_ROOT: &str = "1. Procedimientos Judiciales";
const PROYECTOS_ROOT: &str = "2. Proyectos Jurídicos";
const SEGUROS_ROOT: &str = "/Seguros";

const PROCEDIMIENTO_DEFAULT_SUBFOLDER: &str = "08. Carpeta 0 – Almacenamiento rápido";
const PROYECTO_DEFAULT_SUBFOLDER: &str = "00. General";
const SEGURO_DEFAULT_SUBFOLDER: &str = "04. Otros";

/// Jurisdiction name to filing code; unknown names fall back to their first
/// three letters, uppercased.
const JURISDICTION_MAP: &[(&str, &str)] = &[
    ("contencioso", "CA"),
    ("contencioso-administrativo", "CA"),
    ("contencioso administrativo", "CA"),
    ("social", "SC"),
    ("laboral", "SC"),
    ("civil", "CIV"),
    ("penal", "PEN"),
    ("instruccion", "JPI"),
    ("instrucción", "JPI"),
];

/// Fixed skeleton provisioned under every judicial procedure.
const PROCEDIMIENTO_SUBFOLDERS: &[&str] = &[
    "01. Escritos presentados",
    "02. Resoluciones judiciales",
    "03. Pruebas",
    "03.1 Testifical",
    "03.2 Pericial",
    "03.3 Documental",
    "04. Doctrina y jurisprudencia",
    "05. Notificaciones del Juzgado",
    "06. Anotaciones internas",
    "07. Documentación del cliente",
    "08. Carpeta 0 – Almacenamiento rápido",
    "09. Agenda procesal y plazos",
    "10. Costas y gastos",
];

/// Fixed skeleton provisioned under every legal project.
const PROYECTO_SUBFOLDERS: &[&str] = &[
    "00. General",
    "01. Documentación recibida",
    "02. Borradores",
    "03. Documentación de estudio",
    "04. Comunicaciones",
    "05. Informe/Documento final",
    "06. Contratos o convenios asociados",
    "07. Anexos y notas adicionales",
];

const SEGURO_SUBFOLDERS: &[&str] = &[
    "01. Pólizas",
    "02. Siniestros",
    "03. Comunicaciones",
    "04. Otros",
];

const DOC_TYPE_TO_PROCEDIMIENTO_FOLDER: &[(&str, &str)] = &[
    ("escrito", "01. Escritos presentados"),
    ("escritos", "01. Escritos presentados"),
    ("demanda", "01. Escritos presentados"),
    ("contestacion", "01. Escritos presentados"),
    ("contestación", "01. Escritos presentados"),
    ("sentencia", "02. Resoluciones judiciales"),
    ("auto", "02. Resoluciones judiciales"),
    ("resolucion", "02. Resoluciones judiciales"),
    ("resolución", "02. Resoluciones judiciales"),
    ("providencia", "02. Resoluciones judiciales"),
    ("testifical", "03.1 Testifical"),
    ("testimonio", "03.1 Testifical"),
    ("pericial", "03.2 Pericial"),
    ("peritaje", "03.2 Pericial"),
    ("informe pericial", "03.2 Pericial"),
    ("documental", "03.3 Documental"),
    ("documento", "03.3 Documental"),
    ("prueba documental", "03.3 Documental"),
    ("jurisprudencia", "04. Doctrina y jurisprudencia"),
    ("doctrina", "04. Doctrina y jurisprudencia"),
    ("notificacion", "05. Notificaciones del Juzgado"),
    ("notificación", "05. Notificaciones del Juzgado"),
    ("cedula", "05. Notificaciones del Juzgado"),
    ("cédula", "05. Notificaciones del Juzgado"),
    ("nota", "06. Anotaciones internas"),
    ("anotacion", "06. Anotaciones internas"),
    ("anotación", "06. Anotaciones internas"),
    ("costas", "10. Costas y gastos"),
    ("gastos", "10. Costas y gastos"),
    ("factura judicial", "10. Costas y gastos"),
];

const DOC_TYPE_TO_PROYECTO_FOLDER: &[(&str, &str)] = &[
    ("informe", "05. Informe/Documento final"),
    ("dictamen", "05. Informe/Documento final"),
    ("documento final", "05. Informe/Documento final"),
    ("informe pericial", "05. Informe/Documento final"),
    ("contrato", "06. Contratos o convenios asociados"),
    ("convenio", "06. Contratos o convenios asociados"),
    ("borrador", "02. Borradores"),
    ("draft", "02. Borradores"),
    ("comunicacion", "04. Comunicaciones"),
    ("comunicación", "04. Comunicaciones"),
    ("email", "04. Comunicaciones"),
    ("correo", "04. Comunicaciones"),
    ("documentacion", "01. Documentación recibida"),
    ("documentación", "01. Documentación recibida"),
    ("recibido", "01. Documentación recibida"),
];

const TIPO_SEGURO_FOLDER: &[(&str, &str)] = &[
    ("poliza", "01. Pólizas"),
    ("póliza", "01. Pólizas"),
    ("siniestro", "02. Siniestros"),
    ("comunicacion", "03. Comunicaciones"),
    ("comunicación", "03. Comunicaciones"),
    ("otro", "04. Otros"),
];

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("faltan campos requeridos: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Build the folder plan for a completed, validated answer set. Pure and
/// deterministic; missing required fields fail fast with the enumerated ids
/// rather than guessing a segment.
pub fn synthesize(
    work_type: WorkType,
    client: &str,
    answers: &BTreeMap<String, String>,
    extension: &str,
) -> Result<FolderPlan, SynthesisError> {
    let mut missing = flow::missing_fields(work_type, answers);
    if work_type != WorkType::Seguro && client.trim().is_empty() && !missing.iter().any(|f| f == "client")
    {
        missing.insert(0, "client".to_string());
    }
    if !missing.is_empty() {
        return Err(SynthesisError::MissingFields(missing));
    }

    match work_type {
        WorkType::Procedimiento => Ok(synthesize_procedimiento(client, answers, extension)),
        WorkType::Proyecto => Ok(synthesize_proyecto(client, answers, extension)),
        WorkType::Seguro => Ok(synthesize_seguro(answers, extension)),
    }
}

fn synthesize_procedimiento(
    client: &str,
    answers: &BTreeMap<String, String>,
    extension: &str,
) -> FolderPlan {
    let get = |field: &str| answers.get(field).map(String::as_str).unwrap_or_default();

    let fecha = get("fecha_procedimiento");
    let (year, month) = split_date(fecha);

    let jurisdiccion = get("jurisdiccion");
    let juris_code = jurisdiction_code(jurisdiccion);

    // "455/2025": the bare number feeds segment one, the year suffix segment two.
    let num_procedimiento = get("num_procedimiento");
    let (solo_numero, year_proc) = match num_procedimiento.split_once('/') {
        Some((numero, suffix)) => (numero, suffix),
        None => (num_procedimiento, year),
    };

    let segment_one = format!(
        "{}_{}_{}{}_{}_{}",
        year,
        month,
        juris_code,
        get("juzgado_num"),
        sanitize_filename_part(get("demarcacion")),
        solo_numero,
    );
    let segment_two = format!(
        "{}_{} Vs {}_{}",
        year_proc,
        sanitize_filename_part(get("parte_a")),
        sanitize_filename_part(get("parte_b")),
        sanitize_filename_part(get("materia_proc")),
    );

    let client_folder = sanitize_filename_part(client);
    let base_path = format!(
        "/{}/{}/{}/{}",
        client_folder, PROCEDIMIENTOS_ROOT, segment_one, segment_two
    );

    let subfolder = lookup_subfolder(
        get("doc_type_proc"),
        DOC_TYPE_TO_PROCEDIMIENTO_FOLDER,
        PROCEDIMIENTO_DEFAULT_SUBFOLDER,
    );

    let mut standard_folders = vec![
        format!("/{}", client_folder),
        format!("/{}/{}", client_folder, PROCEDIMIENTOS_ROOT),
        base_path.clone(),
    ];
    standard_folders.extend(
        PROCEDIMIENTO_SUBFOLDERS
            .iter()
            .map(|sf| format!("{}/{}", base_path, sf)),
    );

    FolderPlan {
        work_type: WorkType::Procedimiento,
        full_path: format!("{}/{}", base_path, subfolder),
        target_subfolder: subfolder.to_string(),
        canonical_filename: format!(
            "{}_{}{}",
            fecha,
            sanitize_filename_part(get("doc_type_proc")),
            extension
        ),
        base_path,
        standard_folders,
    }
}

fn synthesize_proyecto(
    client: &str,
    answers: &BTreeMap<String, String>,
    extension: &str,
) -> FolderPlan {
    let get = |field: &str| answers.get(field).map(String::as_str).unwrap_or_default();

    let year = get("proyecto_year");
    let month = get("proyecto_month");
    let client_folder = sanitize_filename_part(client);

    let name = format!(
        "{}_{}_{}_{}_{}",
        year,
        month,
        client_folder,
        sanitize_filename_part(get("proyecto_nombre")),
        sanitize_filename_part(get("proyecto_materia")),
    );
    let base_path = format!("/{}/{}/{}", client_folder, PROYECTOS_ROOT, name);

    let subfolder = lookup_subfolder(
        get("doc_type_proyecto"),
        DOC_TYPE_TO_PROYECTO_FOLDER,
        PROYECTO_DEFAULT_SUBFOLDER,
    );

    let mut standard_folders = vec![
        format!("/{}", client_folder),
        format!("/{}/{}", client_folder, PROYECTOS_ROOT),
        base_path.clone(),
    ];
    standard_folders.extend(
        PROYECTO_SUBFOLDERS
            .iter()
            .map(|sf| format!("{}/{}", base_path, sf)),
    );

    FolderPlan {
        work_type: WorkType::Proyecto,
        full_path: format!("{}/{}", base_path, subfolder),
        target_subfolder: subfolder.to_string(),
        canonical_filename: format!(
            "{}_{}_{}{}",
            year,
            month,
            sanitize_filename_part(get("doc_type_proyecto")),
            extension
        ),
        base_path,
        standard_folders,
    }
}

fn synthesize_seguro(answers: &BTreeMap<String, String>, extension: &str) -> FolderPlan {
    let get = |field: &str| answers.get(field).map(String::as_str).unwrap_or_default();

    let compania = sanitize_filename_part(get("compania"));
    let ramo = sanitize_filename_part(get("ramo"));
    let tomador = sanitize_filename_part(get("tomador"));
    let fecha = get("fecha_seguro");
    let (year, _) = split_date(fecha);

    let base_path = format!("{}/{}/{}/{}/{}", SEGUROS_ROOT, compania, ramo, tomador, year);

    let subfolder = lookup_subfolder(
        get("tipo_seguro"),
        TIPO_SEGURO_FOLDER,
        SEGURO_DEFAULT_SUBFOLDER,
    );

    let mut standard_folders = vec![
        SEGUROS_ROOT.to_string(),
        format!("{}/{}", SEGUROS_ROOT, compania),
        format!("{}/{}/{}", SEGUROS_ROOT, compania, ramo),
        format!("{}/{}/{}/{}", SEGUROS_ROOT, compania, ramo, tomador),
        base_path.clone(),
    ];
    standard_folders.extend(
        SEGURO_SUBFOLDERS
            .iter()
            .map(|sf| format!("{}/{}", base_path, sf)),
    );

    FolderPlan {
        work_type: WorkType::Seguro,
        full_path: format!("{}/{}", base_path, subfolder),
        target_subfolder: subfolder.to_string(),
        canonical_filename: format!(
            "{}_{}{}",
            fecha,
            sanitize_filename_part(get("doc_type_seguro")),
            extension
        ),
        base_path,
        standard_folders,
    }
}

fn jurisdiction_code(jurisdiccion: &str) -> String {
    let normalized = jurisdiccion.trim().to_lowercase();
    JURISDICTION_MAP
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| {
            normalized
                .chars()
                .take(3)
                .collect::<String>()
                .to_uppercase()
        })
}

fn lookup_subfolder(
    doc_type: &str,
    table: &[(&str, &'static str)],
    default: &'static str,
) -> &'static str {
    let normalized = doc_type.trim().to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, folder)| *folder)
        .unwrap_or(default)
}

fn split_date(date: &str) -> (&str, &str) {
    let mut parts = date.splitn(3, '-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();
    (year, month)
}
