//! Ranked match output.

use serde::{Deserialize, Serialize};

/// One job scored against one profile. Recomputed per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: u64,
    pub job_title: String,
    pub company: String,

    /// Cosine similarity scaled to 0-100, two decimals.
    pub similarity_score: f64,

    /// Share of required skills covered by the profile, 0-100.
    pub skill_match: f64,

    /// Experience coverage, 0-100.
    pub experience_match: f64,

    /// Weighted blend of the three scores, two decimals.
    pub overall_score: f64,

    pub job_description: String,
    pub required_skills: Vec<String>,

    /// Lowercase required skills the profile covers.
    #[serde(default)]
    pub matching_skills: Vec<String>,

    /// Lowercase required skills the profile lacks.
    #[serde(default)]
    pub missing_skills: Vec<String>,
}
