//! Skill extraction.
//!
//! Two passes over the lowercased text: substring hits from the fixed
//! vocabulary, then tokens listed after a skills header. The result is
//! the lowercase union of both.

use std::collections::BTreeSet;

use super::patterns::{SKILL_DELIMITERS, SKILL_HEADERS, SKILL_VOCABULARY};
use super::FieldExtractor;

/// Header-listed tokens must be longer than this many characters.
const MIN_LISTED_SKILL_CHARS: usize = 2;

/// Skill extractor over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: &'static [&'static str],
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: SKILL_VOCABULARY,
        }
    }

    /// Vocabulary terms occurring anywhere in the text.
    pub fn vocabulary_skills(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|skill| lower.contains(*skill))
            .map(|skill| skill.to_string())
            .collect()
    }

    /// Tokens listed after "skills:", "technical skills:" or
    /// "proficiencies:" headers.
    pub fn listed_skills(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut skills = Vec::new();

        for header in SKILL_HEADERS.iter() {
            for caps in header.captures_iter(&lower) {
                skills.extend(
                    SKILL_DELIMITERS
                        .split(&caps[1])
                        .map(str::trim)
                        .filter(|token| token.chars().count() > MIN_LISTED_SKILL_CHARS)
                        .map(str::to_string),
                );
            }
        }

        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for SkillExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        self.extract_all(text).into_iter().next()
    }

    /// Vocabulary hits followed by header-listed tokens, deduplicated in
    /// first-seen order.
    fn extract_all(&self, text: &str) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.vocabulary_skills(text)
            .into_iter()
            .chain(self.listed_skills(text))
            .filter(|skill| seen.insert(skill.clone()))
            .collect()
    }
}

/// Deduplicated lowercase skill set.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SkillExtractor::new().extract_all(text).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_list() {
        let skills = extract_skills("Skills: Python, Docker, AWS");
        assert!(skills.contains("python"));
        assert!(skills.contains("docker"));
        assert!(skills.contains("aws"));
    }

    #[test]
    fn test_listed_skills_outside_vocabulary() {
        let extractor = SkillExtractor::new();
        let listed = extractor.listed_skills("Technical Skills: Terraform; Ansible | Bash\nOther");
        assert!(listed.contains(&"terraform".to_string()));
        assert!(listed.contains(&"ansible".to_string()));
        assert!(listed.contains(&"bash".to_string()));
        assert!(!listed.contains(&"other".to_string()));
    }

    #[test]
    fn test_short_listed_tokens_dropped() {
        let listed = SkillExtractor::new().listed_skills("Skills: C, R, Go, Perl");
        assert_eq!(listed, vec!["perl".to_string()]);
    }

    #[test]
    fn test_header_on_next_line() {
        let listed = SkillExtractor::new().listed_skills("SKILLS:\nKafka, Spark");
        assert_eq!(listed, vec!["kafka".to_string(), "spark".to_string()]);
    }

    #[test]
    fn test_vocabulary_is_substring_match() {
        let found = SkillExtractor::new().vocabulary_skills("Built REST API services with GraphQL");
        assert!(found.contains(&"rest api".to_string()));
        assert!(found.contains(&"graphql".to_string()));
    }

    #[test]
    fn test_result_is_deduplicated_lowercase() {
        let all = SkillExtractor::new().extract_all("Skills: PYTHON, python, Python");
        assert_eq!(all.iter().filter(|s| *s == "python").count(), 1);
        assert!(all.iter().all(|s| s.chars().all(|c| !c.is_uppercase())));
    }
}
