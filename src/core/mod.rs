//! Core domain models for interview-analyzer.
//!
//! This module contains the values that flow through one upload: the
//! uploaded document, the summary result, and the session that drives
//! them from extraction to report.

pub mod document;
pub mod session;
pub mod summary;
pub mod surface;

pub use document::{ContentType, UploadedDocument};
pub use session::{PREVIEW_CHARS, Session, SessionState, UploadOutcome, preview};
pub use summary::{FALLBACK_SUMMARY, SummaryResult};
pub use surface::{RecordingSurface, Surface};
