//! # interview-analyzer
//!
//! Interview transcript analysis with Gemini.
//!
//! An uploaded transcript (plain text, PDF, or Word document) is reduced to
//! text, previewed, wrapped in a fixed assessment prompt, and sent to a
//! pinned Gemini model. The generated report is rendered verbatim; any
//! generation failure degrades to a fixed fallback instead of aborting.
//!
//! ## Features
//!
//! - **Extraction**: UTF-8 text, PDF page text, and DOCX paragraph text
//! - **Fixed Prompt**: Six-section assessment template around the transcript
//! - **Graceful Degradation**: Failed generation renders a fallback report
//! - **Memory Mapping**: Efficient handling of large uploads

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod generation;
pub mod io;
pub mod prompt;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{
    ContentType, FALLBACK_SUMMARY, Session, SessionState, SummaryResult, Surface, UploadOutcome,
    UploadedDocument, preview,
};

// Re-export pipeline stages
pub use extraction::{Extractor, create_extractor, extract};
pub use generation::{GeminiClient, ReportRenderer, SUMMARY_MODEL, TextGenerator};
pub use prompt::build_prompt;

// Re-export CLI types
pub use cli::{Cli, Commands, RunStatus, TerminalSurface};

/// Installs the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at `warn`, or at
/// `debug` when `verbose` is set. Calling this twice is harmless.
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    let default_directive = if verbose {
        "interview_analyzer=debug"
    } else {
        "interview_analyzer=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
