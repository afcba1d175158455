//! Configuration structures for the matching pipeline.

use serde::{Deserialize, Serialize};

use crate::document::ExtractionLimits;
use crate::matching::{ScoreWeights, VectorizerParams};

/// Main configuration for the cvmatch pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CvMatchConfig {
    /// Document reading configuration.
    pub document: DocumentConfig,

    /// Vectorizer and ranking configuration.
    pub matching: MatchingConfig,
}

/// Document reading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Maximum document size in bytes (0 = unlimited).
    pub max_bytes: u64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Vectorizer and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Number of matches returned per request.
    pub top_n: usize,

    /// Vocabulary cap.
    pub max_features: usize,

    /// Minimum number of postings a term must appear in.
    pub min_df: usize,

    /// Maximum share of postings a term may appear in (0.0 - 1.0).
    pub max_df: f64,

    /// Smallest n-gram size.
    pub ngram_min: usize,

    /// Largest n-gram size.
    pub ngram_max: usize,

    /// Blend weights for the overall score.
    pub weights: ScoreWeights,

    /// Reuse a fitted model while the job corpus is unchanged.
    pub cache_models: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        let params = VectorizerParams::default();
        Self {
            top_n: 5,
            max_features: params.max_features,
            min_df: params.min_df,
            max_df: params.max_df,
            ngram_min: params.ngram_range.0,
            ngram_max: params.ngram_range.1,
            weights: ScoreWeights::default(),
            cache_models: false,
        }
    }
}

impl MatchingConfig {
    /// Vectorizer parameters described by this section.
    pub fn vectorizer_params(&self) -> VectorizerParams {
        VectorizerParams {
            max_features: self.max_features,
            min_df: self.min_df,
            max_df: self.max_df,
            ngram_range: (self.ngram_min, self.ngram_max),
        }
    }
}

impl CvMatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Size limits applied when reading documents.
    pub fn extraction_limits(&self) -> ExtractionLimits {
        ExtractionLimits {
            max_bytes: (self.document.max_bytes > 0).then_some(self.document.max_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_model() {
        let config = CvMatchConfig::default();
        let params = config.matching.vectorizer_params();
        assert_eq!(params, VectorizerParams::default());
        assert_eq!(config.matching.top_n, 5);
        assert!(!config.matching.cache_models);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CvMatchConfig =
            serde_json::from_str(r#"{"matching": {"top_n": 10}}"#).unwrap();
        assert_eq!(config.matching.top_n, 10);
        assert_eq!(config.matching.max_features, 5000);
        assert_eq!(config.document.max_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CvMatchConfig::default();
        config.matching.cache_models = true;
        config.save(&path).unwrap();

        let loaded = CvMatchConfig::from_file(&path).unwrap();
        assert!(loaded.matching.cache_models);
    }

    #[test]
    fn test_zero_max_bytes_is_unlimited() {
        let mut config = CvMatchConfig::default();
        config.document.max_bytes = 0;
        assert_eq!(config.extraction_limits().max_bytes, None);
    }
}
