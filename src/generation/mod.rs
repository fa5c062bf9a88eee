//! Report generation through an external text-generation model.
//!
//! [`TextGenerator`] is the seam to the external service; [`ReportRenderer`]
//! wraps it with the degrade-to-fallback policy so a failed call never
//! aborts an upload.

pub mod gemini;

pub use gemini::GeminiClient;

use crate::core::{SummaryResult, Surface};
use crate::error::GenerationError;
use tracing::{info, warn};

/// Pinned model identifier. Output shape depends on it, so it is not
/// configurable.
pub const SUMMARY_MODEL: &str = "gemini-2.5-pro-exp-03-25";

/// A blocking text-generation call.
pub trait TextGenerator {
    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Sends `prompt` as the sole payload and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] for any failure of the call.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn model(&self) -> &str {
        (**self).model()
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

/// Turns prompts into [`SummaryResult`]s.
#[derive(Debug)]
pub struct ReportRenderer<G> {
    generator: G,
}

impl<G: TextGenerator> ReportRenderer<G> {
    /// Creates a renderer over a generator.
    pub const fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Returns the underlying generator.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Runs the generation call and keeps the typed outcome.
    ///
    /// # Errors
    ///
    /// Returns the generator's error unchanged.
    pub fn generate(&self, prompt: &str) -> Result<SummaryResult, GenerationError> {
        info!(
            model = self.generator.model(),
            prompt_chars = prompt.chars().count(),
            "Requesting summary"
        );
        self.generator.generate(prompt).map(SummaryResult::new)
    }

    /// Generates a summary, degrading to the fallback on any failure.
    ///
    /// Failures are shown on `surface` as `Error generating summary: ...`
    /// and never returned.
    pub fn generate_summary(&self, prompt: &str, surface: &mut dyn Surface) -> SummaryResult {
        match self.generate(prompt) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Summary generation failed, using fallback");
                surface.error(&format!("Error generating summary: {e}"));
                SummaryResult::fallback()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::RecordingSurface;
    use std::cell::RefCell;

    /// Generator returning a fixed reply and recording prompts.
    pub(crate) struct StubGenerator {
        reply: Result<String, GenerationError>,
        pub(crate) prompts: RefCell<Vec<String>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(err: GenerationError) -> Self {
            Self {
                reply: Err(err),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for StubGenerator {
        fn model(&self) -> &str {
            SUMMARY_MODEL
        }

        fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_success_is_verbatim() {
        let stub = StubGenerator::replying("  ## Interview Overview\nStrong hire.  \n");
        let renderer = ReportRenderer::new(&stub);
        let mut surface = RecordingSurface::new();

        let result = renderer.generate_summary("prompt", &mut surface);

        assert_eq!(result.summary, "  ## Interview Overview\nStrong hire.  \n");
        assert!(surface.errors.is_empty());
        assert_eq!(stub.prompts.borrow().as_slice(), ["prompt"]);
    }

    #[test]
    fn test_empty_success_is_not_fallback() {
        let stub = StubGenerator::replying("");
        let renderer = ReportRenderer::new(&stub);
        let mut surface = RecordingSurface::new();

        let result = renderer.generate_summary("p", &mut surface);
        assert_eq!(result.summary, "");
        assert!(surface.errors.is_empty());
    }

    #[test]
    fn test_every_failure_degrades_to_fallback() {
        let failures = [
            GenerationError::MissingCredential,
            GenerationError::Request("connection refused".to_string()),
            GenerationError::Api("quota exceeded".to_string()),
            GenerationError::EmptyResponse,
            GenerationError::Runtime("no reactor".to_string()),
        ];

        for err in failures {
            let stub = StubGenerator::failing(err.clone());
            let renderer = ReportRenderer::new(&stub);
            let mut surface = RecordingSurface::new();

            let result = renderer.generate_summary("p", &mut surface);

            assert_eq!(result, SummaryResult::fallback());
            assert_eq!(
                surface.errors,
                vec![format!("Error generating summary: {err}")]
            );
        }
    }

    #[test]
    fn test_generate_keeps_typed_error() {
        let stub = StubGenerator::failing(GenerationError::EmptyResponse);
        let renderer = ReportRenderer::new(stub);
        assert_eq!(
            renderer.generate("p"),
            Err(GenerationError::EmptyResponse)
        );
    }

    #[test]
    fn test_boxed_generator() {
        let boxed: Box<dyn TextGenerator> = Box::new(StubGenerator::replying("ok"));
        let renderer = ReportRenderer::new(boxed);
        assert_eq!(renderer.generator().model(), SUMMARY_MODEL);
        assert_eq!(renderer.generate("p").unwrap().summary, "ok");
    }
}
