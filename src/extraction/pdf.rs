//! PDF text extraction using `lopdf`.

use super::traits::Extractor;
use crate::error::ExtractionError;
use lopdf::Document;
use tracing::debug;

/// Extracts page text from PDF uploads.
///
/// Page texts are joined with a single space, in page order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Returns the text of every page, in page order.
    ///
    /// A page whose content cannot be decoded yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::UnsupportedOrCorruptDocument`] if the
    /// bytes cannot be parsed as a PDF.
    pub fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let document =
            Document::load_mem(bytes).map_err(|e| ExtractionError::UnsupportedOrCorruptDocument {
                format: "PDF",
                reason: e.to_string(),
            })?;

        // get_pages is keyed by page number, so iteration is in page order
        let pages = document.get_pages();
        debug!(pages = pages.len(), "Loaded PDF");

        Ok(pages
            .keys()
            .map(|&number| {
                document.extract_text(&[number]).unwrap_or_else(|e| {
                    debug!(page = number, error = %e, "No extractable text on page");
                    String::new()
                })
            })
            .collect())
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.page_texts(bytes)?.join(" "))
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}
