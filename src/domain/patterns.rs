use std::sync::LazyLock;

use regex::Regex;

use unicode_normalization::UnicodeNormalization;

/// Fixed placeholders assigned when the compound parties answer carries no
/// recognizable separator; keeps the multi-step flow live instead of blocking.
pub const PARTY_A_PLACEHOLDER: &str = "Parte Actora";
pub const PARTY_B_PLACEHOLDER: &str = "Parte Demandada";

static BARE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").unwrap());

static JUZGADO_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:juzgado|jdo\.?)\s+(?:n[úuº°]?\s*)?(\d+)").unwrap());
static NUMERO_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:número|numero|nº|n\.)\s*(\d+)").unwrap());
static JUZGADO_ABBR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z]{2,3}(\d+)\b").unwrap());

static DEMARCACION_KNOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Santa\s+Cruz|Tenerife|Las\s+Palmas|La\s+Gomera|San\s+Sebastián|La\s+Laguna)\b")
        .unwrap()
});
static DEMARCACION_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"de\s+([A-ZÁÉÍÓÚ][a-záéíóúñ]+(?:\s+[A-ZÁÉÍÓÚ][a-záéíóúñ]+)?)").unwrap()
});

static NUM_PROCEDIMIENTO: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+/\d{4})").unwrap());
static YEAR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d{4})").unwrap());

static PARTES_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)\s+(?:vs\.?|contra|c/)\s+(.+)$").unwrap());
static PARTE_ACTORA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:actor|demandante)[:\s]\s*(.+?)(?:,|\s+y\s+|$)").unwrap());
static PARTE_DEMANDADA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:demandad[oa])[:\s]\s*(.+?)(?:,|\s+y\s+|$)").unwrap());

static ARTICULO_CP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)art(?:ículo|iculo)?\.?\s*(\d+)\s*C\.?P\.?").unwrap());
static MATERIA_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:materia|asunto|sobre)[:\s]\s*(\S.*)").unwrap());

static YEAR_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static MATERIA_FILLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:sobre|relativo\s+a|en\s+materia\s+de)\s+").unwrap());

/// Legal-matter synonyms to canonical folder labels.
const MATERIAS_COMUNES: &[(&str, &str)] = &[
    ("despido", "Despidos"),
    ("fijeza", "Fijeza"),
    ("urbanismo", "Urbanismo"),
    ("reclamación", "ReclamacionCantidad"),
    ("reclamacion", "ReclamacionCantidad"),
    ("indemnización", "Indemnizacion"),
    ("indemnizacion", "Indemnizacion"),
];

/// Spanish month names to two-digit numbers.
const MONTH_NAMES: &[(&str, &str)] = &[
    ("enero", "01"),
    ("febrero", "02"),
    ("marzo", "03"),
    ("abril", "04"),
    ("mayo", "05"),
    ("junio", "06"),
    ("julio", "07"),
    ("agosto", "08"),
    ("septiembre", "09"),
    ("setiembre", "09"),
    ("octubre", "10"),
    ("noviembre", "11"),
    ("diciembre", "12"),
];

const PROYECTO_KINDS: &[&str] = &["informe", "dictamen", "estudio", "analisis", "análisis", "consulta"];

/// Canonical jurisdiction from free text ("Juzgado de lo Social nº 2" ->
/// "social"). Keyword checks are ordered so compound names win.
pub fn extract_jurisdiccion(input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    if lower.contains("contencioso") {
        Some("contencioso".to_string())
    } else if lower.contains("social") || lower.contains("laboral") {
        Some("social".to_string())
    } else if lower.contains("civil") || lower.contains("primera instancia") {
        Some("civil".to_string())
    } else if lower.contains("penal") {
        Some("penal".to_string())
    } else if lower.contains("instrucción") || lower.contains("instruccion") {
        Some("instrucción".to_string())
    } else {
        None
    }
}

/// Court number: bare digits, "Juzgado nº 2", or an abbreviated "SC2".
pub fn extract_juzgado_num(input: &str) -> Option<String> {
    if let Some(caps) = BARE_NUMBER.captures(input) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = JUZGADO_NUM.captures(input) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = NUMERO_LABEL.captures(input) {
        return Some(caps[1].to_string());
    }
    JUZGADO_ABBR.captures(input).map(|caps| caps[1].to_string())
}

/// Court district; multi-word names are joined ("Santa Cruz" -> "SantaCruz").
pub fn extract_demarcacion(input: &str) -> Option<String> {
    for pattern in [&DEMARCACION_KNOWN, &DEMARCACION_DE] {
        if let Some(caps) = pattern.captures(input) {
            return Some(caps[1].trim().replace(' ', ""));
        }
    }
    None
}

/// Procedure number in `NNN/YYYY` form; a bare number is completed with a
/// nearby year when one is present.
pub fn extract_num_procedimiento(input: &str) -> Option<String> {
    if let Some(caps) = NUM_PROCEDIMIENTO.captures(input) {
        return Some(caps[1].to_string());
    }
    let caps = NUMERO_LABEL
        .captures(input)
        .or_else(|| BARE_NUMBER.captures(input))?;
    let number = caps[1].to_string();
    match YEAR_SUFFIX.captures(input) {
        Some(year) => Some(format!("{}/{}", number, &year[1])),
        None => Some(number),
    }
}

/// Decompose a compound parties answer when one is recognizable. Tries the
/// literal separators first ("vs"/"contra"/"c/"), then a bare slash, then
/// labeled actor/demandado fragments. `None` means the text carries no
/// separator at all, e.g. a single party name.
pub fn try_extract_partes(input: &str) -> Option<(String, String)> {
    if let Some(caps) = PARTES_SEPARATOR.captures(input) {
        return Some((caps[1].trim().to_string(), caps[2].trim().to_string()));
    }

    if let Some((a, b)) = input.split_once('/') {
        let (a, b) = (a.trim(), b.trim());
        if !a.is_empty() && !b.is_empty() {
            return Some((a.to_string(), b.to_string()));
        }
    }

    let actor = PARTE_ACTORA
        .captures(input)
        .map(|caps| caps[1].trim().to_string());
    let demandado = PARTE_DEMANDADA
        .captures(input)
        .map(|caps| caps[1].trim().to_string());
    if actor.is_some() || demandado.is_some() {
        return Some((
            actor.unwrap_or_else(|| PARTY_A_PLACEHOLDER.to_string()),
            demandado.unwrap_or_else(|| PARTY_B_PLACEHOLDER.to_string()),
        ));
    }

    None
}

/// Infallible variant for the single compound question: with nothing
/// recognizable both placeholders are assigned, keeping the flow live.
pub fn extract_partes(input: &str) -> (String, String) {
    try_extract_partes(input).unwrap_or_else(|| {
        (
            PARTY_A_PLACEHOLDER.to_string(),
            PARTY_B_PLACEHOLDER.to_string(),
        )
    })
}

/// Subject matter, canonicalized through the common-matters table or the
/// `Art N CP` shorthand.
pub fn extract_materia(input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    for (key, canonical) in MATERIAS_COMUNES {
        if lower.contains(key) {
            return Some((*canonical).to_string());
        }
    }

    if let Some(caps) = ARTICULO_CP.captures(input) {
        return Some(format!("Art{}CP", &caps[1]));
    }

    MATERIA_LABEL.captures(input).map(|caps| {
        let ascii: String = caps[1].trim().nfkd().filter(char::is_ascii).collect();
        capitalize(&ascii)
    })
}

/// Four-digit year, bare or embedded in text.
pub fn extract_proyecto_year(input: &str) -> Option<String> {
    YEAR_IN_TEXT.captures(input).map(|caps| caps[1].to_string())
}

/// Two-digit month from a bare number ("8" -> "08") or a Spanish month name.
pub fn extract_proyecto_month(input: &str) -> Option<String> {
    if let Some(caps) = BARE_NUMBER.captures(input) {
        let month: u32 = caps[1].parse().ok()?;
        if (1..=12).contains(&month) {
            return Some(format!("{:02}", month));
        }
        return None;
    }
    let lower = input.to_lowercase();
    MONTH_NAMES
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map(|(_, number)| (*number).to_string())
}

/// Project name: a known project kind if mentioned, else the first
/// significant capitalized word.
pub fn extract_proyecto_nombre(input: &str) -> Option<String> {
    let lower = input.to_lowercase();
    for kind in PROYECTO_KINDS {
        if lower.contains(kind) {
            return Some(capitalize(kind));
        }
    }
    input
        .split_whitespace()
        .find(|word| word.chars().count() > 3 && word.chars().next().is_some_and(char::is_uppercase))
        .map(|word| word.to_string())
}

/// Project subject: leading filler ("sobre", "relativo a", ...) removed; the
/// sanitizer handles spacing downstream.
pub fn extract_proyecto_materia(input: &str) -> Option<String> {
    let cleaned = MATERIA_FILLER.replace(input.trim(), "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
