//! Spanish instruction templates for the AI-assisted fields. Each template
//! demands a single-line reply and reserves the literal `AMBIGUO` for inputs
//! the model cannot map confidently.

const TIPO_TRABAJO: &str = r#"Eres un asistente experto en clasificar tipos de trabajo legal en español.

TAREA: Determina si el usuario se refiere a un PROCEDIMIENTO JUDICIAL o un PROYECTO JURÍDICO.

REGLAS ESTRICTAS:
1. Si menciona: demanda, juicio, procedimiento judicial, recurso, juzgado, tribunal → responde "procedimiento"
2. Si menciona: proyecto, asesoría, consultoría, informe, opinión legal, dictamen → responde "proyecto"
3. Si es ambiguo o no está claro, responde exactamente: "AMBIGUO"
4. Responde SOLO con: "procedimiento", "proyecto" o "AMBIGUO"

EJEMPLOS:
- "Es un procedimiento judicial" → procedimiento
- "Un juicio" → procedimiento
- "Proyecto de asesoría" → proyecto
- "Es para un informe legal" → proyecto
- "no sé" → AMBIGUO

ENTRADA DEL USUARIO: "{user_input}"

RESPUESTA (procedimiento, proyecto o AMBIGUO):"#;

const CLIENT: &str = r#"Eres un asistente experto en extraer nombres de clientes de texto en español.

TAREA: Extrae ÚNICAMENTE el nombre del cliente de la siguiente entrada del usuario.

REGLAS ESTRICTAS:
1. Extrae solo el nombre del cliente, empresa u organización
2. Elimina completamente palabras como: "el cliente", "se llama", "nombre", "es"
3. Mantén nombres completos con apellidos, puntos, guiones y símbolos corporativos (S.L., S.A., Inc., &, etc.)
4. Si la entrada es ambigua o no contiene un nombre claro, responde exactamente: "AMBIGUO"
5. NO añadas puntos, comas ni explicaciones adicionales

EJEMPLOS:
- "El cliente es Juan Pérez" → Juan Pérez
- "se llama Microsoft España S.L." → Microsoft España S.L.
- "Tech & Solutions Inc." → Tech & Solutions Inc.
- "no sé" → AMBIGUO
- "después te digo" → AMBIGUO

ENTRADA DEL USUARIO: "{user_input}"

RESPUESTA (solo el nombre del cliente o AMBIGUO):"#;

const DOC_TYPE_PROC: &str = r#"Eres un asistente experto en clasificar documentos judiciales en español.

TAREA: Extrae el tipo de documento judicial de la entrada del usuario.

TIPOS COMUNES:
- Demanda, Contestación, Escrito de conclusiones, Recurso de apelación, Recurso de casación
- Sentencia, Auto, Providencia, Diligencia
- Prueba documental, Prueba pericial, Prueba testifical

REGLAS:
1. Extrae solo el tipo de documento
2. Elimina artículos y palabras introductorias
3. Mantén formato apropiado con mayúsculas (ej: "Demanda", "Recurso de apelación")
4. Si es ambiguo, responde "AMBIGUO"

EJEMPLOS:
- "Es una demanda" → Demanda
- "escrito de contestación" → Contestación
- "Un recurso de apelación" → Recurso de apelación
- "no sé" → AMBIGUO

ENTRADA DEL USUARIO: "{user_input}"

RESPUESTA:"#;

const DOC_TYPE_PROYECTO: &str = r#"Eres un asistente experto en clasificar documentos de proyectos jurídicos.

TAREA: Extrae el tipo de documento de proyecto legal.

TIPOS COMUNES:
- Informe jurídico, Dictamen, Opinión legal, Memoria
- Contrato, Convenio, Acuerdo
- Estatutos, Reglamento, Política
- Documento de trabajo, Borrador

REGLAS:
1. Extrae solo el tipo de documento
2. Elimina artículos y palabras introductorias
3. Mantén formato apropiado con mayúsculas
4. Si es ambiguo, responde "AMBIGUO"

EJEMPLOS:
- "Es un informe jurídico" → Informe jurídico
- "Un contrato" → Contrato
- "Borrador de convenio" → Convenio
- "no estoy seguro" → AMBIGUO

ENTRADA DEL USUARIO: "{user_input}"

RESPUESTA:"#;

/// Template for an AI-assisted field, with the user's text spliced in.
/// `None` means the field is not AI-assisted.
pub fn prompt_for(field_id: &str, user_input: &str) -> Option<String> {
    let template = match field_id {
        "tipo_trabajo" => TIPO_TRABAJO,
        "client" => CLIENT,
        "doc_type_proc" => DOC_TYPE_PROC,
        "doc_type_proyecto" => DOC_TYPE_PROYECTO,
        _ => return None,
    };
    Some(template.replace("{user_input}", user_input))
}
