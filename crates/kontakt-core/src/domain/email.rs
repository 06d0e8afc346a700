/// Loose `local@domain.tld` shape check: no whitespace, exactly one `@`,
/// and a dot inside the domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("valid@example.com"));
        assert!(is_valid_email("max.mustermann@firma.de"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
    }

    #[test]
    fn rejects_whitespace_and_double_at() {
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }
}
