use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").unwrap());

// Lowercase only: "Jane@Example.com" is not matched verbatim.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9.\-+_]+@[a-z0-9.\-+_]+\.[a-z]+").unwrap());

/// Every phone-like run in `text`, in document order. Duplicates are kept.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every lowercase email address in `text`, in document order. Duplicates are kept.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_formats() {
        let text = "Call +1 (555) 123-4567 or 44.20.7946.0958 today";
        let phones = extract_phone_numbers(text);
        assert_eq!(phones, vec!["+1 (555) 123-4567", "44.20.7946.0958"]);
    }

    #[test]
    fn test_phone_requires_ten_characters() {
        assert!(extract_phone_numbers("room 12345").is_empty());
        assert!(extract_phone_numbers("").is_empty());
    }

    #[test]
    fn test_phone_cannot_start_with_zero_digit() {
        // the leading 0 is skipped, leaving only nine characters
        assert!(extract_phone_numbers("0123456789").is_empty());
        assert_eq!(extract_phone_numbers("01234567890"), vec!["1234567890"]);
    }

    #[test]
    fn test_phone_duplicates_preserved() {
        let text = "Home: 555-123-4567\nMobile: 555-123-4567";
        assert_eq!(extract_phone_numbers(text).len(), 2);
    }

    #[test]
    fn test_every_phone_match_is_a_full_pattern_match() {
        let anchored = Regex::new(r"^[+(]?[1-9][0-9 .\-()]{8,}[0-9]$").unwrap();
        let text = "Tel (44) 20 7946 0958, fax 1.800.555.0199 and id 9876543210";
        let phones = extract_phone_numbers(text);
        assert!(!phones.is_empty());
        assert!(phones.iter().all(|p| anchored.is_match(p)));
    }

    #[test]
    fn test_email_basic() {
        let emails = extract_emails("Contact: jane.doe+cv@mail-box.example.org.");
        assert_eq!(emails, vec!["jane.doe+cv@mail-box.example.org"]);
    }

    #[test]
    fn test_email_uppercase_not_matched() {
        assert!(extract_emails("JANE@EXAMPLE.COM").is_empty());
        // only the lowercase tail of a mixed-case address matches
        assert_eq!(extract_emails("Jane@example.com"), vec!["ane@example.com"]);
    }

    #[test]
    fn test_email_duplicates_preserved() {
        let text = "a@b.io and again a@b.io";
        assert_eq!(extract_emails(text), vec!["a@b.io", "a@b.io"]);
    }

    #[test]
    fn test_extractors_are_idempotent() {
        let text = "x@y.com 555 123 4567";
        assert_eq!(extract_emails(text), extract_emails(text));
        assert_eq!(extract_phone_numbers(text), extract_phone_numbers(text));
    }
}
