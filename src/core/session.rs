//! Upload flow: extract, preview, prompt, generate, render.
//!
//! A session starts idle and moves to processing on the first upload. It
//! never goes back; each later upload restarts the flow from scratch and
//! nothing carries over between uploads.

use super::document::UploadedDocument;
use super::summary::SummaryResult;
use super::surface::Surface;
use crate::error::ExtractionError;
use crate::extraction::extract;
use crate::generation::{ReportRenderer, TextGenerator};
use crate::io::char_prefix;
use crate::prompt::build_prompt;
use tracing::{info, warn};

/// Number of characters shown in the transcript preview.
pub const PREVIEW_CHARS: usize = 1000;

/// Marker appended to a truncated preview.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Status line shown before generation.
pub const ANALYZING_STATUS: &str = "🔍 Analyzing Interview Transcript...";

/// Status line shown while the generation call is in flight.
pub const GENERATING_STATUS: &str = "Generating comprehensive analysis...";

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No upload yet.
    Idle,
    /// At least one upload has been received.
    Processing,
}

/// How one upload's flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// A report was rendered (possibly the fallback).
    Reported(SummaryResult),
    /// Extraction failed; nothing was generated.
    Halted(ExtractionError),
}

impl UploadOutcome {
    /// Returns `true` if a report was rendered.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        matches!(self, Self::Reported(_))
    }
}

/// Returns the transcript preview: the first [`PREVIEW_CHARS`] characters,
/// followed by `...` only if the text was longer.
///
/// # Examples
///
/// ```
/// use interview_analyzer::core::preview;
///
/// assert_eq!(preview("short"), "short");
/// assert_eq!(preview(&"a".repeat(1001)), format!("{}...", "a".repeat(1000)));
/// ```
#[must_use]
pub fn preview(text: &str) -> String {
    match char_prefix(text, PREVIEW_CHARS) {
        (head, true) => format!("{head}{PREVIEW_ELLIPSIS}"),
        (whole, false) => whole.to_string(),
    }
}

/// Drives uploads through the analysis flow.
pub struct Session<G> {
    renderer: ReportRenderer<G>,
    state: SessionState,
}

impl<G: TextGenerator> Session<G> {
    /// Creates an idle session around a generator.
    pub const fn new(generator: G) -> Self {
        Self {
            renderer: ReportRenderer::new(generator),
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the report renderer.
    pub const fn renderer(&self) -> &ReportRenderer<G> {
        &self.renderer
    }

    /// Runs one upload through the flow, rendering to `surface`.
    ///
    /// If extraction fails, the error is shown and the flow stops before
    /// any prompt is built. Otherwise the preview, status lines, and report
    /// are shown in order; a failed generation renders the fallback.
    pub fn handle_upload(
        &mut self,
        document: UploadedDocument,
        surface: &mut dyn Surface,
    ) -> UploadOutcome {
        self.state = SessionState::Processing;
        info!(upload = ?document, "Processing upload");

        let transcript = match extract(&document) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Extraction failed, halting upload");
                surface.error(&format!("Error processing file: {e}"));
                return UploadOutcome::Halted(e);
            }
        };

        surface.preview(&preview(&transcript));
        surface.status(ANALYZING_STATUS);
        surface.status(GENERATING_STATUS);

        let prompt = build_prompt(&transcript);
        let summary = self.renderer.generate_summary(&prompt, surface);

        surface.report(&summary.summary);
        UploadOutcome::Reported(summary)
    }

    /// Runs one upload without a surface and without the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Extraction`] if the document cannot be
    /// decoded, or [`crate::Error::Generation`] if the model call fails.
    pub fn analyze(&mut self, document: &UploadedDocument) -> crate::Result<SummaryResult> {
        self.state = SessionState::Processing;
        info!(upload = ?document, "Analyzing upload");

        let transcript = extract(document)?;
        let prompt = build_prompt(&transcript);
        Ok(self.renderer.generate(&prompt)?)
    }
}
