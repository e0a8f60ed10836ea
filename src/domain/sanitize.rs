use unicode_normalization::UnicodeNormalization;

/// Normalize free text into a filesystem-safe token: diacritics stripped via
/// NFKD, whitespace runs collapsed to a single underscore, anything outside
/// `[A-Za-z0-9_-]` dropped. Idempotent; no truncation.
pub fn sanitize_filename_part(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();

    let mut out = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for ch in ascii.trim().chars() {
        if ch.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            continue;
        }
        if pending_separator {
            out.push('_');
            pending_separator = false;
        }
        out.push(ch);
    }

    out
}
