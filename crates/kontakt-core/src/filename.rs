use crate::domain::ContactRecord;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const FALLBACK_FILE_NAME: &str = "kontakt";

/// Filesystem-safe base name (no extension) from first and last name.
///
/// Accented letters are decomposed and their marks dropped; every run of
/// characters outside `[a-zA-Z0-9._-]` becomes a single `_`, and the result
/// never starts or ends with `_`.
pub fn build_safe_file_name(record: &ContactRecord) -> String {
    safe_file_name(&record.first_name, &record.last_name)
}

pub fn safe_file_name(first_name: &str, last_name: &str) -> String {
    let base = format!("{first_name}_{last_name}");

    let mut out = String::with_capacity(base.len());
    let mut pending_underscore = false;
    for ch in base.trim().nfkd().filter(|ch| !is_combining_mark(*ch)) {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '-' {
            if pending_underscore && !out.is_empty() {
                out.push('_');
            }
            pending_underscore = false;
            out.push(ch);
        } else {
            pending_underscore = true;
        }
    }

    if out.is_empty() {
        return FALLBACK_FILE_NAME.to_string();
    }
    out
}
