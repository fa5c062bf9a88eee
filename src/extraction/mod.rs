//! Text extraction for uploaded transcripts.
//!
//! This module provides a trait-based dispatch over the closed set of
//! supported formats:
//!
//! - **Plain text**: UTF-8 decode, used for `text/plain` and unknown types
//! - **PDF**: per-page text joined by single spaces
//! - **DOCX**: per-paragraph text joined by single spaces

pub mod docx;
pub mod pdf;
pub mod plain;
pub mod traits;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;
pub use traits::Extractor;

use crate::core::{ContentType, UploadedDocument};
use crate::error::ExtractionError;
use tracing::debug;

/// Returns the extractor for a declared content type.
///
/// Unknown types fall back to plain-text decoding.
#[must_use]
pub fn create_extractor(content_type: ContentType) -> Box<dyn Extractor> {
    match content_type {
        ContentType::Pdf => Box::new(PdfExtractor),
        ContentType::WordDocument => Box::new(DocxExtractor),
        ContentType::PlainText | ContentType::Unknown => Box::new(PlainTextExtractor),
    }
}

/// Extracts the transcript text of an upload.
///
/// # Errors
///
/// Returns [`ExtractionError::InvalidEncoding`] for text uploads that are not
/// UTF-8, and [`ExtractionError::UnsupportedOrCorruptDocument`] when the PDF
/// or DOCX decoder rejects the bytes.
///
/// # Examples
///
/// ```
/// use interview_analyzer::core::{ContentType, UploadedDocument};
/// use interview_analyzer::extraction::extract;
///
/// let doc = UploadedDocument::new(b"A: I write Rust.".to_vec(), ContentType::Unknown);
/// assert_eq!(extract(&doc).unwrap(), "A: I write Rust.");
/// ```
pub fn extract(document: &UploadedDocument) -> Result<String, ExtractionError> {
    let extractor = create_extractor(document.content_type);
    let text = extractor.extract(&document.bytes)?;
    debug!(
        extractor = extractor.name(),
        bytes = document.size(),
        chars = text.chars().count(),
        "Extracted transcript"
    );
    Ok(text)
}
