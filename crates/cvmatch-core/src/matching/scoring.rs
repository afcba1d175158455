//! Rule-based sub-scores blended with the vector similarity.

use serde::{Deserialize, Serialize};

/// Weights for the overall score. With the defaults the overall score is
/// out of 100: similarity contributes up to 60, skills up to 30 and
/// experience up to 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub skills: f64,
    pub experience: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            similarity: 0.6,
            skills: 0.30,
            experience: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Weighted blend of three 0-100 scores.
    pub fn blend(&self, similarity: f64, skill_match: f64, experience_match: f64) -> f64 {
        similarity * self.similarity + skill_match * self.skills + experience_match * self.experience
    }
}

fn lowercase_all<I, S>(skills: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills.into_iter().map(|s| s.as_ref().to_lowercase()).collect()
}

/// Bidirectional substring test: "python" covers "python3" and the
/// reverse.
fn covers(profile_skills: &[String], job_skill: &str) -> bool {
    profile_skills
        .iter()
        .any(|skill| skill.contains(job_skill) || job_skill.contains(skill.as_str()))
}

/// Lowercase job skills covered by the profile, in job order.
pub fn matching_skills<I, S>(profile_skills: I, job_skills: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let profile = lowercase_all(profile_skills);
    lowercase_all(job_skills)
        .into_iter()
        .filter(|skill| covers(&profile, skill))
        .collect()
}

/// Lowercase job skills the profile lacks, in job order.
pub fn missing_skills<I, S>(profile_skills: I, job_skills: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let profile = lowercase_all(profile_skills);
    lowercase_all(job_skills)
        .into_iter()
        .filter(|skill| !covers(&profile, skill))
        .collect()
}

/// Percentage of required skills covered by the profile. A posting with
/// no required skills scores 0.
pub fn skill_match<I, S>(profile_skills: I, job_skills: &[String]) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if job_skills.is_empty() {
        return 0.0;
    }
    let matched = matching_skills(profile_skills, job_skills).len();
    matched as f64 / job_skills.len() as f64 * 100.0
}

/// Experience coverage: full marks when nothing is required or the
/// requirement is met, otherwise the proportion met.
pub fn experience_match(years: f64, min_years: f64) -> f64 {
    if min_years == 0.0 || years >= min_years {
        return 100.0;
    }
    (years / min_years * 100.0).max(0.0)
}

/// Round to two decimals.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_skill_match_partial() {
        assert_eq!(skill_match(["python"], &skills(&["Python", "SQL"])), 50.0);
    }

    #[test]
    fn test_skill_match_no_required_skills() {
        assert_eq!(skill_match(["python", "sql"], &[]), 0.0);
        assert_eq!(skill_match(Vec::<String>::new(), &[]), 0.0);
    }

    #[test]
    fn test_skill_match_bounds() {
        let job = skills(&["Rust", "Go", "SQL"]);
        for profile in [vec![], vec!["rust"], vec!["rust", "sql", "go"], vec!["haskell"]] {
            let score = skill_match(profile, &job);
            assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn test_substring_both_directions() {
        assert_eq!(skill_match(["python"], &skills(&["Python3"])), 100.0);
        assert_eq!(skill_match(["python3"], &skills(&["Python"])), 100.0);
    }

    #[test]
    fn test_own_skills_score_full() {
        let own = skills(&["python", "docker", "aws"]);
        assert_eq!(skill_match(&own, &own), 100.0);
    }

    #[test]
    fn test_matching_and_missing_partition() {
        let job = skills(&["Python", "Django", "AWS"]);
        let profile = ["python", "aws"];
        assert_eq!(matching_skills(profile, &job), skills(&["python", "aws"]));
        assert_eq!(missing_skills(profile, &job), skills(&["django"]));
    }

    #[test]
    fn test_experience_match() {
        assert_eq!(experience_match(0.0, 0.0), 100.0);
        assert_eq!(experience_match(12.0, 0.0), 100.0);
        assert_eq!(experience_match(5.0, 5.0), 100.0);
        assert_eq!(experience_match(8.0, 3.0), 100.0);
        assert_eq!(experience_match(2.0, 4.0), 50.0);
        assert_eq!(experience_match(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_default_blend_is_out_of_100() {
        let weights = ScoreWeights::default();
        assert!((weights.blend(100.0, 100.0, 100.0) - 100.0).abs() < 1e-9);
        assert!((weights.blend(50.0, 0.0, 100.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(0.0), 0.0);
    }
}
