//! Uploaded documents and their declared content types.

use crate::io::UploadBytes;
use std::fmt;
use std::path::Path;

/// MIME label for PDF uploads.
pub const PDF_MIME: &str = "application/pdf";

/// MIME label for word-processor (OOXML) uploads.
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME label for plain-text uploads.
pub const TEXT_MIME: &str = "text/plain";

/// Declared content type of an upload.
///
/// The set is closed; every label maps to exactly one variant, and labels
/// that are absent or unrecognized become [`ContentType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `text/plain`.
    PlainText,
    /// `application/pdf`.
    Pdf,
    /// Word-processor document (`.docx`).
    WordDocument,
    /// Anything else, including no declared type.
    Unknown,
}

impl ContentType {
    /// Maps a declared MIME label to a content type.
    ///
    /// Parameters (`; charset=...`) are ignored and matching is
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use interview_analyzer::core::ContentType;
    ///
    /// assert_eq!(ContentType::from_mime(Some("application/PDF")), ContentType::Pdf);
    /// assert_eq!(ContentType::from_mime(Some("text/plain; charset=utf-8")), ContentType::PlainText);
    /// assert_eq!(ContentType::from_mime(None), ContentType::Unknown);
    /// ```
    #[must_use]
    pub fn from_mime(mime: Option<&str>) -> Self {
        let Some(mime) = mime else {
            return Self::Unknown;
        };

        match canonicalize_mime(mime).as_str() {
            PDF_MIME => Self::Pdf,
            DOCX_MIME => Self::WordDocument,
            TEXT_MIME => Self::PlainText,
            _ => Self::Unknown,
        }
    }

    /// Guesses the content type from a file name's extension.
    #[must_use]
    pub fn guess_from_path(path: &Path) -> Self {
        let guess = mime_guess::from_path(path);
        Self::from_mime(guess.first_raw())
    }

    /// Canonical MIME label, if the type is recognized.
    #[must_use]
    pub const fn mime(self) -> Option<&'static str> {
        match self {
            Self::PlainText => Some(TEXT_MIME),
            Self::Pdf => Some(PDF_MIME),
            Self::WordDocument => Some(DOCX_MIME),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime().unwrap_or("unknown"))
    }
}

/// Strips parameters, trims, and lowercases a MIME label.
#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// An upload: raw bytes plus the declared content type.
///
/// Lives for a single interaction and is consumed by the session.
#[derive(PartialEq, Eq)]
pub struct UploadedDocument {
    /// Display name (usually the file name).
    pub name: Option<String>,
    /// Declared content type.
    pub content_type: ContentType,
    /// Raw upload bytes, owned or memory-mapped.
    pub bytes: UploadBytes,
}

impl UploadedDocument {
    /// Creates an upload from bytes and a declared type.
    #[must_use]
    pub fn new(bytes: impl Into<UploadBytes>, content_type: ContentType) -> Self {
        Self {
            name: None,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Size of the upload in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Bytes are elided so debug logs never carry transcript content.
impl fmt::Debug for UploadedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedDocument")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}
