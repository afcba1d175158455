//! TF-IDF vector space over a corpus of job postings.
//!
//! A [`FittedModel`] is an immutable value: vocabulary, idf weights and the
//! job matrix are built together by [`FittedModel::fit`] and never change.
//! Refitting means building a new model.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use ndarray::{Array1, Array2, ArrayView1};
use regex::Regex;
use tracing::{debug, trace};

use super::stopwords::is_stop_word;
use super::Result;
use crate::error::ModelError;
use crate::models::job::JobPosting;

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Vectorizer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorizerParams {
    /// Vocabulary cap, keeping the most frequent terms.
    pub max_features: usize,

    /// Minimum number of postings a term must appear in.
    pub min_df: usize,

    /// Maximum share of postings a term may appear in.
    pub max_df: f64,

    /// Inclusive n-gram size range.
    pub ngram_range: (usize, usize),
}

impl Default for VectorizerParams {
    fn default() -> Self {
        Self {
            max_features: 5000,
            min_df: 1,
            max_df: 0.95,
            ngram_range: (1, 2),
        }
    }
}

impl VectorizerParams {
    /// Check that the parameters describe a usable vectorizer.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(ModelError::InvalidParams("max_features must be positive".into()));
        }
        if self.min_df == 0 {
            return Err(ModelError::InvalidParams("min_df must be at least 1".into()));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(ModelError::InvalidParams(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::InvalidParams(format!(
                "invalid ngram range ({}, {})",
                min_n, max_n
            )));
        }
        Ok(())
    }

    /// Split text into terms: lowercase word tokens of two or more
    /// characters, stop words removed, then joined into n-grams.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|token| !is_stop_word(token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n.max(1)..=max_n {
            if n > tokens.len() {
                break;
            }
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    /// Highest number of postings a term may appear in. Never below one,
    /// so a single-posting corpus keeps its terms.
    fn max_doc_count(&self, n_docs: usize) -> f64 {
        (self.max_df * n_docs as f64).max(1.0)
    }
}

/// A vector space fitted to one job corpus.
#[derive(Debug, Clone)]
pub struct FittedModel {
    params: VectorizerParams,
    terms: Vec<String>,
    vocabulary: HashMap<String, usize>,
    idf: Array1<f64>,
    /// One L2-normalized row per posting.
    job_matrix: Array2<f64>,
    job_ids: Vec<u64>,
}

impl FittedModel {
    /// Build the vocabulary and job vectors from the corpus.
    pub fn fit(params: &VectorizerParams, jobs: &[JobPosting]) -> Result<Self> {
        params.validate()?;

        let documents: Vec<Vec<String>> = jobs
            .iter()
            .map(|job| params.analyze(&job.document_text()))
            .collect();
        let n_docs = documents.len();

        let max_doc_count = params.max_doc_count(n_docs);
        if n_docs > 0 && params.min_df as f64 > max_doc_count {
            return Err(ModelError::InvalidParams(format!(
                "max_df allows at most {} postings, fewer than min_df {}",
                max_doc_count, params.min_df
            )));
        }

        // term -> (corpus count, document frequency)
        let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
        for terms in &documents {
            let mut seen = HashSet::new();
            for term in terms {
                let entry = stats.entry(term.as_str()).or_default();
                entry.0 += 1;
                if seen.insert(term.as_str()) {
                    entry.1 += 1;
                }
            }
        }
        let candidates = stats.len();

        let mut kept: Vec<(&str, usize, usize)> = stats
            .into_iter()
            .filter(|(_, (_, df))| *df >= params.min_df && *df as f64 <= max_doc_count)
            .map(|(term, (count, df))| (term, count, df))
            .collect();

        if kept.len() > params.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(params.max_features);
        }
        kept.sort_by(|a, b| a.0.cmp(b.0));

        let terms: Vec<String> = kept.iter().map(|(term, _, _)| term.to_string()).collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let idf: Array1<f64> = kept
            .iter()
            .map(|(_, _, df)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let mut job_matrix: Array2<f64> = Array2::zeros((n_docs, terms.len()));
        for (row, document) in documents.iter().enumerate() {
            for term in document {
                if let Some(&column) = vocabulary.get(term) {
                    job_matrix[[row, column]] += 1.0;
                }
            }
        }
        job_matrix *= &idf;
        for mut row in job_matrix.rows_mut() {
            let norm = row.dot(&row).sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|weight| weight / norm);
            }
        }

        debug!(
            "Fitted vector space: {} postings, {} of {} terms kept",
            n_docs,
            terms.len(),
            candidates
        );

        Ok(Self {
            params: params.clone(),
            terms,
            vocabulary,
            idf,
            job_matrix,
            job_ids: jobs.iter().map(|job| job.id).collect(),
        })
    }

    /// Project text into the fitted space as an L2-normalized vector.
    /// Terms outside the vocabulary are ignored.
    pub fn project(&self, text: &str) -> Array1<f64> {
        let mut vector: Array1<f64> = Array1::zeros(self.terms.len());
        let mut known = 0usize;
        for term in self.params.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                vector[column] += 1.0;
                known += 1;
            }
        }
        trace!("Projected text onto {} vocabulary hits", known);

        vector *= &self.idf;
        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector.mapv_inplace(|weight| weight / norm);
        }
        vector
    }

    /// Cosine similarity between a projected vector and every posting, in
    /// corpus order. Rows and projections are unit length or zero, so the
    /// dot product is the cosine.
    pub fn similarities(&self, vector: &Array1<f64>) -> Array1<f64> {
        if self.terms.is_empty() {
            return Array1::zeros(self.job_ids.len());
        }
        self.job_matrix.dot(vector).mapv(|s| s.clamp(0.0, 1.0))
    }

    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }

    /// Vocabulary terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf(&self) -> ArrayView1<'_, f64> {
        self.idf.view()
    }

    pub fn job_ids(&self) -> &[u64] {
        &self.job_ids
    }

    /// Vector of the posting at `index` in corpus order.
    pub fn job_vector(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.job_ids.len()).then(|| self.job_matrix.row(index))
    }
}

/// Handle that may or may not hold a fitted model.
///
/// Fitting replaces the vocabulary and job matrix as one unit.
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    params: VectorizerParams,
    model: Option<FittedModel>,
}

impl Vectorizer {
    pub fn new(params: VectorizerParams) -> Self {
        Self { params, model: None }
    }

    /// Fit to the corpus, replacing any previous model.
    pub fn fit(&mut self, jobs: &[JobPosting]) -> Result<&FittedModel> {
        let model = FittedModel::fit(&self.params, jobs)?;
        Ok(self.model.insert(model))
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Result<&FittedModel> {
        self.model.as_ref().ok_or(ModelError::NotFitted)
    }

    /// Project text with the current model.
    pub fn project(&self, text: &str) -> Result<Array1<f64>> {
        Ok(self.model()?.project(text))
    }
}
