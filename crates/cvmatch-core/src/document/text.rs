//! Plain text documents.

use super::{Document, DocumentFormat, Result, TextExtractor};
use crate::error::DocumentError;

/// UTF-8 plain text reader.
#[derive(Debug, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    fn extract(&self, data: &[u8]) -> Result<Document> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        let text = std::str::from_utf8(data)
            .map_err(|e| DocumentError::extraction("TXT", e))?;
        Ok(Document::PlainText(text.to_string()))
    }
}
