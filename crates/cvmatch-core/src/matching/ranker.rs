//! Ranks job postings against a candidate profile.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::cache::ModelCache;
use super::scoring::{experience_match, matching_skills, missing_skills, round2, skill_match, ScoreWeights};
use super::vectorizer::{FittedModel, VectorizerParams};
use super::Result;
use crate::models::config::MatchingConfig;
use crate::models::job::JobPosting;
use crate::models::matching::MatchResult;
use crate::models::profile::CandidateProfile;
use crate::store::JobStore;

/// Blends vector similarity with skill and experience sub-scores.
///
/// Each call to [`rank`](Self::rank) fits a fresh model on the corpus it is
/// given, unless a [`ModelCache`] is attached.
#[derive(Debug, Default)]
pub struct JobMatcher {
    params: VectorizerParams,
    weights: ScoreWeights,
    cache: Option<ModelCache>,
}

impl JobMatcher {
    /// Create a matcher with the default vectorizer and weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from a configuration section.
    pub fn from_config(config: &MatchingConfig) -> Self {
        let matcher = Self::new()
            .with_params(config.vectorizer_params())
            .with_weights(config.weights);
        if config.cache_models {
            matcher.with_cache(ModelCache::new())
        } else {
            matcher
        }
    }

    pub fn with_params(mut self, params: VectorizerParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Reuse fitted models while the corpus is unchanged.
    pub fn with_cache(mut self, cache: ModelCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn cache(&self) -> Option<&ModelCache> {
        self.cache.as_ref()
    }

    fn model_for(&self, jobs: &[JobPosting]) -> Result<Arc<FittedModel>> {
        match &self.cache {
            Some(cache) => cache.get_or_fit(&self.params, jobs),
            None => Ok(Arc::new(FittedModel::fit(&self.params, jobs)?)),
        }
    }

    /// Rank `jobs` for `profile`, best overall score first, at most `top_n`
    /// results. Postings with zero similarity are dropped. Equal scores
    /// keep corpus order.
    pub fn rank(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobPosting],
        top_n: usize,
    ) -> Result<Vec<MatchResult>> {
        if jobs.is_empty() {
            debug!("No job postings to rank");
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let model = self.model_for(jobs)?;
        let query = model.project(&profile.match_text());
        let similarities = model.similarities(&query);

        let years = f64::from(profile.experience.years);
        let mut matches: Vec<MatchResult> = jobs
            .iter()
            .zip(similarities.iter())
            .filter(|(_, similarity)| **similarity > 0.0)
            .map(|(job, &similarity)| self.score(profile, job, similarity, years))
            .collect();

        matches.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        matches.truncate(top_n);

        info!(
            "Ranked {} postings, returning {} matches in {:?}",
            jobs.len(),
            matches.len(),
            start.elapsed()
        );
        Ok(matches)
    }

    /// Rank the store's current corpus.
    pub fn rank_from_store(
        &self,
        profile: &CandidateProfile,
        store: &dyn JobStore,
        top_n: usize,
    ) -> crate::Result<Vec<MatchResult>> {
        let jobs = store.all_jobs()?;
        Ok(self.rank(profile, &jobs, top_n)?)
    }

    fn score(&self, profile: &CandidateProfile, job: &JobPosting, similarity: f64, years: f64) -> MatchResult {
        let similarity_score = similarity * 100.0;
        let skills = skill_match(&profile.skills, &job.required_skills);
        let experience = experience_match(years, job.min_experience);

        MatchResult {
            job_id: job.id,
            job_title: job.title.clone(),
            company: job.company.clone(),
            similarity_score: round2(similarity_score),
            skill_match: skills,
            experience_match: experience,
            overall_score: round2(self.weights.blend(similarity_score, skills, experience)),
            job_description: job.description.clone(),
            required_skills: job.required_skills.clone(),
            matching_skills: matching_skills(&profile.skills, &job.required_skills),
            missing_skills: missing_skills(&profile.skills, &job.required_skills),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ProfileBuilder, ResumeParser};
    use crate::store::{sample_jobs, MemoryStore};
    use pretty_assertions::assert_eq;

    fn profile(cleaned_text: &str, skills: &[&str], years: u32) -> CandidateProfile {
        let mut profile = ProfileBuilder::new().build("", None, "");
        profile.cleaned_text = cleaned_text.to_string();
        profile.skills = skills.iter().map(|s| s.to_string()).collect();
        profile.experience.years = years;
        profile
    }

    fn dev_job() -> JobPosting {
        JobPosting::new(1, "Dev", "Python developer role")
            .with_company("X")
            .with_skills(["Python", "SQL"])
    }

    #[test]
    fn test_empty_corpus() {
        let matcher = JobMatcher::new();
        for top_n in [0, 1, 10] {
            assert!(matcher.rank(&profile("python", &["python"], 3), &[], top_n).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_posting_scores() {
        let matches = JobMatcher::new()
            .rank(&profile("python developer", &["python"], 0), &[dev_job()], 5)
            .unwrap();

        assert_eq!(matches.len(), 1);
        let result = &matches[0];
        assert_eq!(result.job_id, 1);
        assert_eq!(result.company, "X");
        assert_eq!(result.skill_match, 50.0);
        assert_eq!(result.experience_match, 100.0);
        assert!(result.similarity_score > 0.0 && result.similarity_score <= 100.0);
        assert_eq!(result.matching_skills, vec!["python".to_string()]);
        assert_eq!(result.missing_skills, vec!["sql".to_string()]);

        let expected = round2(result.similarity_score * 0.6 + 50.0 * 0.30 + 100.0 * 0.10);
        assert!((result.overall_score - expected).abs() <= 0.01);
    }

    #[test]
    fn test_zero_similarity_dropped() {
        let matches = JobMatcher::new()
            .rank(&profile("gardening knitting", &[], 0), &[dev_job()], 5)
            .unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_sorted_and_truncated() {
        let resume = "Python developer with Django, Flask and AWS.\n\
                      Machine learning with TensorFlow and pandas.\n\
                      React and JavaScript frontend work, Docker and Kubernetes.\n\
                      5 years of experience";
        let candidate = ProfileBuilder::new().build(resume, Some("Sam"), "sam.txt");
        let jobs = sample_jobs();

        let all = JobMatcher::new().rank(&candidate, &jobs, jobs.len()).unwrap();
        assert!(all.len() > 2);
        assert!(all.windows(2).all(|w| w[0].overall_score >= w[1].overall_score));

        let top = JobMatcher::new().rank(&candidate, &jobs, 2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top, all[..2].to_vec());
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let candidate = profile("react javascript frontend developer", &["react", "css"], 2);
        let matcher = JobMatcher::new();
        let first = matcher.rank(&candidate, &sample_jobs(), 6).unwrap();
        let second = matcher.rank(&candidate, &sample_jobs(), 6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoreWeights {
            similarity: 0.0,
            skills: 1.0,
            experience: 0.0,
        };
        let matches = JobMatcher::new()
            .with_weights(weights)
            .rank(&profile("python developer", &["python"], 0), &[dev_job()], 5)
            .unwrap();
        assert_eq!(matches[0].overall_score, 50.0);
    }

    #[test]
    fn test_cached_matcher() {
        let config = MatchingConfig {
            cache_models: true,
            ..Default::default()
        };
        let matcher = JobMatcher::from_config(&config);
        let candidate = profile("python developer", &["python"], 1);

        let first = matcher.rank(&candidate, &sample_jobs(), 3).unwrap();
        let second = matcher.rank(&candidate, &sample_jobs(), 3).unwrap();
        assert_eq!(first, second);

        let stats = matcher.cache().unwrap().stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[test]
    fn test_rank_from_store() {
        let store = MemoryStore::new().with_jobs(vec![dev_job()]);
        let matches = JobMatcher::new()
            .rank_from_store(&profile("python developer", &["python"], 0), &store, 5)
            .unwrap();
        assert_eq!(matches.len(), 1);
    }
}
