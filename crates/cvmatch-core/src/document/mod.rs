//! Document text extraction.
//!
//! A resume arrives as bytes plus a format tag. Each format resolves once,
//! here, into a [`Document`]; everything downstream sees a plain string.

mod docx;
mod pdf;
mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Supported resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
    /// UTF-8 plain text.
    Text,
}

impl DocumentFormat {
    /// Resolve a format tag such as `"pdf"` or `"TXT"`.
    ///
    /// `doc` is accepted and read as DOCX; legacy binary files then fail
    /// with [`DocumentError::Extraction`].
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag.trim().trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::Docx),
            "txt" => Ok(Self::Text),
            other => Err(DocumentError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Resolve the format from a file name's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::from_tag(extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Text read as-is.
    PlainText(String),
    /// Ordered parts (pages or paragraphs) of a structured format.
    Structured(Vec<String>),
}

impl Document {
    /// Flatten into one text blob. Structured parts are each followed by a
    /// newline.
    pub fn into_text(self) -> String {
        match self {
            Self::PlainText(text) => text,
            Self::Structured(parts) => {
                let mut text = String::with_capacity(parts.iter().map(|p| p.len() + 1).sum());
                for part in parts {
                    text.push_str(&part);
                    text.push('\n');
                }
                text
            }
        }
    }
}

/// Caller-supplied bounds on document reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionLimits {
    /// Maximum accepted document size in bytes.
    pub max_bytes: Option<u64>,
}

impl ExtractionLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_bytes(max_bytes: u64) -> Self {
        Self {
            max_bytes: Some(max_bytes),
        }
    }

    fn check(&self, size: u64) -> Result<()> {
        match self.max_bytes {
            Some(limit) if size > limit => Err(DocumentError::TooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}

/// Trait for format-specific text extractors.
///
/// Extraction is all-or-nothing: an error means no text at all.
pub trait TextExtractor {
    /// The format this extractor reads.
    fn format(&self) -> DocumentFormat;

    /// Extract the document content from raw bytes.
    fn extract(&self, data: &[u8]) -> Result<Document>;
}

/// Get the extractor for a format.
pub fn extractor_for(format: DocumentFormat) -> Box<dyn TextExtractor> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfExtractor::new()),
        DocumentFormat::Docx => Box::new(DocxExtractor::new()),
        DocumentFormat::Text => Box::new(PlainTextExtractor::new()),
    }
}

/// Extract text from in-memory document bytes.
pub fn extract_bytes(data: &[u8], format: DocumentFormat, limits: ExtractionLimits) -> Result<String> {
    limits.check(data.len() as u64)?;

    let document = extractor_for(format).extract(data)?;
    let text = document.into_text();

    debug!("Extracted {} chars from {} bytes of {}", text.len(), data.len(), format);
    Ok(text)
}

/// Extract text from a document on disk, resolving the format from its
/// extension.
pub fn extract_path(path: &Path, limits: ExtractionLimits) -> Result<String> {
    let format = DocumentFormat::from_path(path)?;

    let size = std::fs::metadata(path)?.len();
    limits.check(size)?;

    let data = std::fs::read(path)?;
    extract_bytes(&data, format, limits)
}
