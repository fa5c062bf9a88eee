//! Extractor trait definition.
//!
//! Every supported upload format implements the same capability: turn the
//! raw bytes into a single transcript string.

use crate::error::ExtractionError;

/// Trait for turning upload bytes into transcript text.
///
/// Implementations are pure: the same bytes always produce the same text,
/// and nothing is trimmed or normalized.
///
/// # Examples
///
/// ```
/// use interview_analyzer::extraction::{Extractor, PlainTextExtractor};
///
/// let text = PlainTextExtractor.extract(b"Q: Hello? A: Hi.").unwrap();
/// assert_eq!(text, "Q: Hello? A: Hi.");
/// ```
pub trait Extractor: Send + Sync {
    /// Extracts the text content of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded in this format.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;

    /// Returns the name of the format handled by this extractor.
    fn name(&self) -> &'static str;
}
