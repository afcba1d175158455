//! Email and phone number extraction.

use super::patterns::{EMAIL, PHONE_PATTERNS};
use super::FieldExtractor;

/// Email address extractor.
#[derive(Debug, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        EMAIL.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Phone number extractor.
///
/// Patterns are tried in order (digit groups, parenthesized area code,
/// international prefix). Only the first pattern that matches anything
/// contributes results.
#[derive(Debug, Default)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        PHONE_PATTERNS
            .iter()
            .find_map(|pattern| pattern.find(text))
            .map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<String> {
        PHONE_PATTERNS
            .iter()
            .map(|pattern| {
                pattern
                    .find_iter(text)
                    .map(|m| m.as_str().to_string())
                    .collect::<Vec<_>>()
            })
            .find(|matches| !matches.is_empty())
            .unwrap_or_default()
    }
}

/// First email address in the text, or an empty string.
pub fn extract_email(text: &str) -> String {
    EmailExtractor.extract(text).unwrap_or_default()
}

/// First phone number in the text, or an empty string.
pub fn extract_phone(text: &str) -> String {
    PhoneExtractor.extract(text).unwrap_or_default()
}
