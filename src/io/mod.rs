//! I/O utilities for interview-analyzer.
//!
//! Provides upload reading, with large transcripts memory-mapped, along
//! with the Unicode helpers used for previews.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, UploadBytes, read_upload};
pub use unicode::char_prefix;
