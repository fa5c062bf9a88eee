//! Plain-text extraction.

use super::traits::Extractor;
use crate::error::ExtractionError;

/// Decodes uploads as UTF-8 text.
///
/// Used for `text/plain` and for any unrecognized declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(std::str::from_utf8(bytes)?.to_owned())
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
