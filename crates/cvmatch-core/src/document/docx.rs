//! DOCX text extraction: `word/document.xml` read out of the zip container.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::trace;
use zip::ZipArchive;

use super::{Document, DocumentFormat, Result, TextExtractor};
use crate::error::DocumentError;

const BODY_PART: &str = "word/document.xml";

/// DOCX reader producing one text part per paragraph.
#[derive(Debug, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn read_body(&self, data: &[u8]) -> Result<String> {
        let mut archive =
            ZipArchive::new(Cursor::new(data)).map_err(|e| DocumentError::extraction("DOCX", e))?;

        let mut body = archive
            .by_name(BODY_PART)
            .map_err(|e| DocumentError::extraction("DOCX", format!("{}: {}", BODY_PART, e)))?;

        let mut xml = String::new();
        body.read_to_string(&mut xml)
            .map_err(|e| DocumentError::extraction("DOCX", e))?;
        Ok(xml)
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, data: &[u8]) -> Result<Document> {
        let xml = self.read_body(data)?;
        let paragraphs = parse_paragraphs(&xml)?;

        trace!("Read {} DOCX paragraphs", paragraphs.len());
        Ok(Document::Structured(paragraphs))
    }
}

/// Collect the text of every `w:p` element in document order.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // Paragraphs nest inside text boxes.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;
    // Tab stop definitions in `w:pPr/w:tabs` are not text.
    let mut in_tab_stops = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                b"w:tabs" => in_tab_stops = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if !in_tab_stops => push_char(&mut open, '\t'),
                b"w:br" | b"w:cr" => push_char(&mut open, '\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| DocumentError::extraction("DOCX", e))?;
                if let Some(paragraph) = open.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tabs" => in_tab_stops = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(DocumentError::extraction(
                    "DOCX",
                    format!("malformed XML at byte {}: {}", reader.buffer_position(), e),
                ));
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_char(open: &mut [String], c: char) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push(c);
    }
}
