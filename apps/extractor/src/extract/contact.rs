//! Email and phone extractors. Both take the first match in document order
//! from the full text; neither validates that the contact actually works.

use crate::extract::patterns::PatternRegistry;

/// Returns the first email-shaped substring, or an empty string.
pub fn extract_email(text: &str, registry: &PatternRegistry) -> String {
    registry
        .email()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Returns the first phone-shaped substring, normalized by dropping every
/// non-digit character except a leading `+`. No country-code or area-code
/// plausibility checks.
pub fn extract_phone(text: &str, registry: &PatternRegistry) -> String {
    match registry.phone().find(text) {
        Some(m) => m
            .as_str()
            .chars()
            .enumerate()
            .filter(|&(i, c)| c.is_ascii_digit() || (c == '+' && i == 0))
            .map(|(_, c)| c)
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PatternRegistry {
        PatternRegistry::load().unwrap()
    }

    #[test]
    fn test_email_embedded_in_prose_is_recovered_exactly() {
        let text = "Reach out to jane.doe@example.com for interview scheduling.";
        assert_eq!(extract_email(text, &registry()), "jane.doe@example.com");
    }

    #[test]
    fn test_first_of_two_emails_wins() {
        let text = "primary: a@first.org backup: b@second.org";
        assert_eq!(extract_email(text, &registry()), "a@first.org");
    }

    #[test]
    fn test_no_email_yields_empty_string() {
        assert_eq!(extract_email("no contact details here", &registry()), "");
    }

    #[test]
    fn test_international_phone_is_flattened_to_digits_and_plus() {
        let text = "Phone: +1 (415) 555-1234";
        assert_eq!(extract_phone(text, &registry()), "+14155551234");
    }

    #[test]
    fn test_dotted_phone_separators_are_stripped() {
        assert_eq!(extract_phone("call 555.1234 today", &registry()), "5551234");
    }

    #[test]
    fn test_bare_seven_digit_number_matches() {
        assert_eq!(extract_phone("ext 5550199", &registry()), "5550199");
    }

    #[test]
    fn test_no_phone_yields_empty_string() {
        assert_eq!(extract_phone("text without numbers", &registry()), "");
    }
}
