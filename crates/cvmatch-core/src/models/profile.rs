//! Candidate profile produced by parsing one resume.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured view of one resume. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Text exactly as extracted from the document.
    pub raw_text: String,

    /// Whitespace-collapsed text with unsafe characters removed.
    pub cleaned_text: String,

    /// First email address found, empty if none.
    #[serde(default)]
    pub email: String,

    /// First phone number found, empty if none.
    #[serde(default)]
    pub phone: String,

    /// Lowercase skill names.
    #[serde(default)]
    pub skills: BTreeSet<String>,

    #[serde(default)]
    pub experience: Experience,

    /// Lines mentioning a degree, diploma or certification, in document order.
    #[serde(default)]
    pub education: Vec<String>,

    #[serde(default)]
    pub word_count: usize,

    #[serde(default)]
    pub char_count: usize,

    /// Supplied by the caller.
    #[serde(default = "default_candidate_name")]
    pub candidate_name: String,

    /// Supplied by the caller.
    #[serde(default)]
    pub filename: String,
}

pub(crate) fn default_candidate_name() -> String {
    "Unknown".to_string()
}

/// Work experience summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Largest "N years experience" figure mentioned, 0 if none.
    pub years: u32,

    /// Lines containing a job-title keyword, verbatim.
    pub positions: Vec<String>,

    /// Always empty; company extraction is not attempted.
    pub companies: Vec<String>,
}

impl CandidateProfile {
    /// Text projected into the job vector space: cleaned text followed by the
    /// space-joined skill set.
    pub fn match_text(&self) -> String {
        let skills: Vec<&str> = self.skills.iter().map(String::as_str).collect();
        format!("{} {}", self.cleaned_text, skills.join(" "))
    }
}

/// A profile as held by an external store, with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub id: u64,

    #[serde(flatten)]
    pub profile: CandidateProfile,
}
