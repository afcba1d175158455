//! Orchestrates text extraction and field extraction into a profile.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::rules::{
    clean_text, extract_education, extract_email, extract_experience, extract_phone,
    extract_skills,
};
use crate::document::{self, DocumentFormat, ExtractionLimits, Result};
use crate::models::profile::{default_candidate_name, CandidateProfile};

/// Trait for resume parsing.
pub trait ResumeParser {
    /// Build a profile from already extracted text. Never fails.
    fn build(&self, raw_text: &str, candidate_name: Option<&str>, filename: &str) -> CandidateProfile;

    /// Size limits applied to documents before extraction.
    fn limits(&self) -> ExtractionLimits;

    /// Read a resume from disk, resolving the format from its extension.
    fn parse_path(&self, path: &Path, candidate_name: Option<&str>) -> Result<CandidateProfile> {
        let raw_text = document::extract_path(path, self.limits())?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        Ok(self.build(&raw_text, candidate_name, filename))
    }

    /// Read a resume from memory with a declared format.
    fn parse_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
        candidate_name: Option<&str>,
        filename: &str,
    ) -> Result<CandidateProfile> {
        let raw_text = document::extract_bytes(data, format, self.limits())?;
        Ok(self.build(&raw_text, candidate_name, filename))
    }
}

/// Default resume parser.
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    limits: ExtractionLimits,
}

impl ProfileBuilder {
    /// Create a parser with no document size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document size limits.
    pub fn with_limits(mut self, limits: ExtractionLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl ResumeParser for ProfileBuilder {
    fn build(&self, raw_text: &str, candidate_name: Option<&str>, filename: &str) -> CandidateProfile {
        let start = Instant::now();
        info!("Parsing resume from {} characters of text", raw_text.len());

        let cleaned_text = clean_text(raw_text);
        let word_count = cleaned_text.split_whitespace().count();
        let char_count = cleaned_text.chars().count();

        let profile = CandidateProfile {
            raw_text: raw_text.to_string(),
            email: extract_email(raw_text),
            phone: extract_phone(raw_text),
            skills: extract_skills(raw_text),
            experience: extract_experience(raw_text),
            education: extract_education(raw_text),
            word_count,
            char_count,
            cleaned_text,
            candidate_name: candidate_name
                .map(str::to_string)
                .unwrap_or_else(default_candidate_name),
            filename: filename.to_string(),
        };

        debug!(
            "Extracted {} skills, {} years, {} positions in {:?}",
            profile.skills.len(),
            profile.experience.years,
            profile.experience.positions.len(),
            start.elapsed()
        );

        profile
    }

    fn limits(&self) -> ExtractionLimits {
        self.limits
    }
}
