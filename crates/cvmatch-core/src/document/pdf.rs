//! PDF text extraction using lopdf and pdf-extract.

use std::borrow::Cow;

use lopdf::Document as PdfDocument;
use tracing::debug;

use super::{Document, DocumentFormat, Result, TextExtractor};
use crate::error::DocumentError;

/// PDF reader producing one text part per page.
#[derive(Debug, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse the PDF and return the bytes pdf-extract should read.
    ///
    /// PDFs encrypted with an empty user password are decrypted and
    /// re-serialized first.
    fn load<'a>(&self, data: &'a [u8]) -> Result<(PdfDocument, Cow<'a, [u8]>)> {
        let mut doc = PdfDocument::load_mem(data).map_err(|e| DocumentError::extraction("PDF", e))?;

        let raw = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(DocumentError::extraction("PDF", "document is encrypted"));
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| DocumentError::extraction("PDF", format!("failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        Ok((doc, raw))
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, data: &[u8]) -> Result<Document> {
        let (doc, raw) = self.load(data)?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(DocumentError::extraction("PDF", "document has no pages"));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(&raw)
            .map_err(|e| DocumentError::extraction("PDF", e))?;

        debug!("Extracted text from {} of {} PDF pages", pages.len(), page_count);
        Ok(Document::Structured(pages))
    }
}
