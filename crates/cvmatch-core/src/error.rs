//! Error types for the cvmatch-core library.

use thiserror::Error;

/// Main error type for the cvmatch library.
#[derive(Error, Debug)]
pub enum CvMatchError {
    /// Document reading error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Vector space model error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Record (de)serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning a document into text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The format tag or file extension is not recognized.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The underlying reader failed (corrupt file, bad encoding).
    #[error("error reading {format}: {reason}")]
    Extraction { format: String, reason: String },

    /// The document exceeds the caller-supplied size limit.
    #[error("document is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    /// The document could not be read from disk.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl DocumentError {
    pub(crate) fn extraction(format: impl Into<String>, reason: impl ToString) -> Self {
        Self::Extraction {
            format: format.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors related to the vector space model.
#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    /// Projection was attempted before the model was fitted.
    #[error("vectorizer must be fitted first")]
    NotFitted,

    /// Vectorizer parameters are out of range.
    #[error("invalid vectorizer parameters: {0}")]
    InvalidParams(String),
}

/// Result type for the cvmatch library.
pub type Result<T> = std::result::Result<T, CvMatchError>;
