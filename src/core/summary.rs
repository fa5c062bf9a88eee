//! The summary value handed to the display layer.

use serde::{Deserialize, Serialize};

/// Placeholder summary shown when generation fails for any reason.
pub const FALLBACK_SUMMARY: &str = "Could not generate summary.";

/// Result of a report generation.
///
/// Always carries a `summary` string: either the model's text, verbatim,
/// or [`FALLBACK_SUMMARY`].
///
/// # Examples
///
/// ```
/// use interview_analyzer::core::SummaryResult;
///
/// let result = SummaryResult::new("MOCK_SUMMARY");
/// assert_eq!(result.summary, "MOCK_SUMMARY");
/// assert!(SummaryResult::fallback().is_fallback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Generated report text, or the fallback placeholder.
    pub summary: String,
}

impl SummaryResult {
    /// Wraps generated text without modification.
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// The fixed fallback result.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_SUMMARY)
    }

    /// Returns `true` if this is the fallback placeholder.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.summary == FALLBACK_SUMMARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_single_key() {
        let result = SummaryResult::new("Overall: strong hire.");
        let json = serde_json::to_value(&result).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["summary"], "Overall: strong hire.");
    }

    #[test]
    fn test_fallback_roundtrip() {
        let json = serde_json::to_string(&SummaryResult::fallback()).unwrap();
        assert_eq!(json, r#"{"summary":"Could not generate summary."}"#);

        let back: SummaryResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_fallback());
    }

    #[test]
    fn test_new_keeps_whitespace() {
        let result = SummaryResult::new("  padded\n");
        assert_eq!(result.summary, "  padded\n");
        assert!(!result.is_fallback());
    }
}
