/// Characters allowed in phone and fax numbers besides ASCII digits.
const PHONE_PUNCTUATION: [char; 6] = [' ', '+', '(', ')', '-', '/'];

/// Character-class check only; there is no minimum digit count.
pub fn is_valid_phone(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_digit() || PHONE_PUNCTUATION.contains(&ch))
}

#[cfg(test)]
mod tests {
    use super::is_valid_phone;

    #[test]
    fn accepts_formatted_numbers() {
        assert!(is_valid_phone("+49 30 1234567"));
        assert!(is_valid_phone("(0)40 / 123-456"));
    }

    #[test]
    fn rejects_letters_and_extensions() {
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("415-555-1212 x89"));
        assert!(!is_valid_phone("+49.30.123"));
    }

    #[test]
    fn short_numbers_are_allowed() {
        assert!(is_valid_phone("112"));
    }
}
