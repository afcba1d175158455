//! Single-slot cache of the most recently fitted model.
//!
//! Keyed by a blake3 hash of the corpus and vectorizer parameters, so any
//! change to the job set forces a refit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use super::vectorizer::{FittedModel, VectorizerParams};
use super::Result;
use crate::models::job::JobPosting;

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Freshness-checked model cache.
#[derive(Debug, Default)]
pub struct ModelCache {
    slot: Mutex<Option<(blake3::Hash, Arc<FittedModel>)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash of everything the fitted model depends on.
    pub fn corpus_key(params: &VectorizerParams, jobs: &[JobPosting]) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(params.max_features as u64).to_le_bytes());
        hasher.update(&(params.min_df as u64).to_le_bytes());
        hasher.update(&params.max_df.to_le_bytes());
        hasher.update(&(params.ngram_range.0 as u64).to_le_bytes());
        hasher.update(&(params.ngram_range.1 as u64).to_le_bytes());

        for job in jobs {
            let text = job.document_text();
            hasher.update(&job.id.to_le_bytes());
            hasher.update(&(text.len() as u64).to_le_bytes());
            hasher.update(text.as_bytes());
        }
        hasher.finalize()
    }

    /// Return the cached model if the corpus is unchanged, otherwise fit
    /// and store a new one. The lock is held across the fit.
    pub fn get_or_fit(&self, params: &VectorizerParams, jobs: &[JobPosting]) -> Result<Arc<FittedModel>> {
        let key = Self::corpus_key(params, jobs);
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some((cached_key, model)) = slot.as_ref() {
            if *cached_key == key {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Model cache hit for {} postings", jobs.len());
                return Ok(Arc::clone(model));
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Model cache miss, refitting on {} postings", jobs.len());

        let model = Arc::new(FittedModel::fit(params, jobs)?);
        *slot = Some((key, Arc::clone(&model)));
        Ok(model)
    }

    /// Drop the cached model.
    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs() -> Vec<JobPosting> {
        vec![
            JobPosting::new(1, "Rust Engineer", "Systems work"),
            JobPosting::new(2, "Data Analyst", "Reporting"),
        ]
    }

    #[test]
    fn test_reuses_model_for_same_corpus() {
        let cache = ModelCache::new();
        let params = VectorizerParams::default();

        let first = cache.get_or_fit(&params, &jobs()).unwrap();
        let second = cache.get_or_fit(&params, &jobs()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_changed_corpus_refits() {
        let cache = ModelCache::new();
        let params = VectorizerParams::default();
        cache.get_or_fit(&params, &jobs()).unwrap();

        let mut changed = jobs();
        changed[1].description = "Dashboards".to_string();
        let model = cache.get_or_fit(&params, &changed).unwrap();

        assert!(model.terms().contains(&"dashboards".to_string()));
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_params_are_part_of_key() {
        let unigrams = VectorizerParams {
            ngram_range: (1, 1),
            ..Default::default()
        };
        assert_ne!(
            ModelCache::corpus_key(&VectorizerParams::default(), &jobs()),
            ModelCache::corpus_key(&unigrams, &jobs())
        );
    }

    #[test]
    fn test_clear() {
        let cache = ModelCache::new();
        let params = VectorizerParams::default();
        cache.get_or_fit(&params, &jobs()).unwrap();
        cache.clear();
        cache.get_or_fit(&params, &jobs()).unwrap();
        assert_eq!(cache.stats().misses, 2);
    }
}
