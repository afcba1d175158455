//! Years of experience and position lines.

use super::patterns::{POSITION_KEYWORDS, YEARS_EXPERIENCE};
use super::FieldExtractor;
use crate::models::profile::Experience;

/// "N years experience" / "experience: N years" extractor.
#[derive(Debug, Default)]
pub struct YearsExtractor;

impl FieldExtractor for YearsExtractor {
    type Output = u32;

    /// The largest figure mentioned anywhere in the text.
    ///
    /// This is a heuristic: an unrelated number next to "years experience"
    /// is taken at face value.
    fn extract(&self, text: &str) -> Option<u32> {
        self.extract_all(text).into_iter().max()
    }

    /// Every parseable figure, pattern by pattern. Figures that overflow
    /// are skipped.
    fn extract_all(&self, text: &str) -> Vec<u32> {
        YEARS_EXPERIENCE
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .filter_map(|caps| caps[1].parse().ok())
            .collect()
    }
}

/// Claimed years of experience, 0 if none.
pub fn extract_years(text: &str) -> u32 {
    YearsExtractor.extract(text).unwrap_or(0)
}

/// Lines containing a job-title keyword, trimmed, in document order.
pub fn extract_positions(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| {
            let lower = line.to_lowercase();
            POSITION_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .map(|line| line.trim().to_string())
        .collect()
}

/// Experience summary. Company extraction is not attempted.
pub fn extract_experience(text: &str) -> Experience {
    Experience {
        years: extract_years(text),
        positions: extract_positions(text),
        companies: Vec::new(),
    }
}
