use archivador::domain::sanitize::sanitize_filename_part;

#[test]
fn given_accented_text_when_sanitizing_then_diacritics_become_ascii() {
    assert_eq!(sanitize_filename_part("Ayto La Laguna"), "Ayto_La_Laguna");
    assert_eq!(sanitize_filename_part("Jurídico año"), "Juridico_ano");
}

#[test]
fn given_whitespace_runs_when_sanitizing_then_single_underscore() {
    assert_eq!(sanitize_filename_part("  Pedro   Perez  "), "Pedro_Perez");
}

#[test]
fn given_disallowed_symbols_when_sanitizing_then_they_are_dropped() {
    assert_eq!(sanitize_filename_part("Pérez / García"), "Perez_Garcia");
    assert_eq!(sanitize_filename_part("Motor-7 Islas"), "Motor-7_Islas");
    assert_eq!(sanitize_filename_part("J.J. Tealquila S.L."), "JJ_Tealquila_SL");
}

#[test]
fn given_any_input_when_sanitizing_twice_then_output_is_stable() {
    for input in [
        "Ayto La Laguna",
        "Pérez / García",
        "  ya   limpio_con-guion  ",
        "Señoría vs. Cabildo",
        "",
    ] {
        let once = sanitize_filename_part(input);
        assert_eq!(sanitize_filename_part(&once), once);
    }
}
