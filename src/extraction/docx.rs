//! Word-processor (`.docx`) text extraction.
//!
//! A `.docx` upload is a zip package whose `word/document.xml` part holds
//! the body. Only top-level body paragraphs count; paragraphs nested in
//! tables, text boxes, or other containers are skipped.

use super::traits::Extractor;
use crate::error::ExtractionError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::ZipArchive;

/// Package part that holds the main document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from `.docx` uploads.
///
/// Paragraph texts are joined with a single space, in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Returns the text of every body paragraph, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::UnsupportedOrCorruptDocument`] if the
    /// package or its XML cannot be read.
    pub fn paragraph_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let xml = read_document_part(bytes)?;
        let paragraphs = parse_body_paragraphs(&xml)?;
        debug!(paragraphs = paragraphs.len(), "Loaded DOCX");
        Ok(paragraphs)
    }
}

impl Extractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.paragraph_texts(bytes)?.join(" "))
    }

    fn name(&self) -> &'static str {
        "docx"
    }
}

fn corrupt(reason: impl ToString) -> ExtractionError {
    ExtractionError::UnsupportedOrCorruptDocument {
        format: "DOCX",
        reason: reason.to_string(),
    }
}

fn read_document_part(bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(corrupt)?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| corrupt(format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = Vec::new();
    part.read_to_end(&mut xml).map_err(corrupt)?;
    Ok(xml)
}

/// Walks `document.xml` and collects the text of `w:body`'s direct `w:p`
/// children.
fn parse_body_paragraphs(xml: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    // Element stack depth relative to w:body (None until w:body opens)
    let mut body_depth: Option<usize> = None;
    let mut depth = 0usize;
    // Some while inside a top-level paragraph
    let mut current: Option<String> = None;
    // Depth of the outermost open w:r; text, tab, and break marks count only
    // as its direct children, so content nested inside a run is skipped
    let mut run_depth: Option<usize> = None;
    let mut in_text = false;
    let mut paragraphs = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(corrupt)? {
            Event::Start(e) => {
                depth += 1;
                match e.name().as_ref() {
                    b"w:body" if body_depth.is_none() => body_depth = Some(depth),
                    b"w:p" if body_depth.is_some_and(|b| depth == b + 1) => {
                        current = Some(String::new());
                    }
                    b"w:r" if current.is_some() && run_depth.is_none() => {
                        run_depth = Some(depth);
                    }
                    b"w:t" if current.is_some() && run_depth == Some(depth - 1) => {
                        in_text = true;
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                let is_top_level = body_depth.is_some_and(|b| depth == b);
                let in_run = run_depth == Some(depth);
                match e.name().as_ref() {
                    b"w:p" if is_top_level => paragraphs.push(String::new()),
                    b"w:tab" if in_run => push_char(&mut current, '\t'),
                    b"w:br" | b"w:cr" if in_run => push_char(&mut current, '\n'),
                    _ => {}
                }
            }
            Event::Text(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape().map_err(corrupt)?);
                }
            }
            Event::CData(t) if in_text => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"w:t" if in_text && run_depth == Some(depth - 1) => in_text = false,
                    b"w:r" if run_depth == Some(depth) => run_depth = None,
                    b"w:p" if body_depth.is_some_and(|b| depth == b + 1) => {
                        if let Some(text) = current.take() {
                            paragraphs.push(text);
                        }
                    }
                    b"w:body" if body_depth == Some(depth) => body_depth = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn push_char(current: &mut Option<String>, c: char) {
    if let Some(text) = current.as_mut() {
        text.push(c);
    }
}
