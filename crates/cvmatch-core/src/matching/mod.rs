//! Vector space model and match ranking.

mod cache;
mod ranker;
mod scoring;
mod stopwords;
mod vectorizer;

pub use cache::{CacheStats, ModelCache};
pub use ranker::JobMatcher;
pub use scoring::{experience_match, matching_skills, missing_skills, skill_match, ScoreWeights};
pub use stopwords::is_stop_word;
pub use vectorizer::{FittedModel, Vectorizer, VectorizerParams};

use crate::error::ModelError;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
