//! Error types for interview-analyzer operations.
//!
//! This module provides the error hierarchy using `thiserror` for every
//! stage of an upload: reading the file, extracting its text, configuring
//! the generation client, calling the model, and driving the CLI surface.

use thiserror::Error;

/// Result type alias for interview-analyzer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Text extraction errors (undecodable uploads).
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Generation errors (external model call).
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Configuration errors (credentials, endpoint).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (reading uploads from disk).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while turning an uploaded document into text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Plain-text upload is not valid UTF-8.
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidEncoding {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },

    /// The underlying format decoder rejected the document.
    #[error("unsupported or corrupt {format} document: {reason}")]
    UnsupportedOrCorruptDocument {
        /// Format that was being decoded ("PDF", "DOCX").
        format: &'static str,
        /// Decoder message.
        reason: String,
    },
}

/// Errors raised by the external generation call.
///
/// These never escape the report renderer; they are turned into the
/// fallback summary plus a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No API key was configured.
    #[error("API key is not configured")]
    MissingCredential,

    /// Transport-level failure (connection, TLS, request building).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with an error payload.
    #[error("API error: {0}")]
    Api(String),

    /// The response carried no generated text.
    #[error("response contained no text")]
    EmptyResponse,

    /// The blocking runtime could not be started.
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required API key missing from the environment and `.env`.
    #[error("Google API key not found in .env file. Set {var} to enable report generation")]
    MissingApiKey {
        /// Environment variable that was looked up.
        var: &'static str,
    },

    /// A configuration value was present but unusable.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// Environment variable or flag name.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// I/O-specific errors for reading uploads.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Upload has an extension outside the accepted set.
    #[error("unsupported file type: {path} (accepted: {accepted})")]
    UnsupportedFileType {
        /// Path of the rejected upload.
        path: String,
        /// Comma-separated accepted extensions.
        accepted: String,
    },

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing to the terminal failed.
    #[error("output failed: {0}")]
    OutputFailed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<std::str::Utf8Error> for ExtractionError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidEncoding {
            offset: err.valid_up_to(),
        }
    }
}

impl From<async_openai::error::OpenAIError> for GenerationError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        use async_openai::error::OpenAIError;

        match err {
            OpenAIError::Reqwest(e) => Self::Request(e.to_string()),
            OpenAIError::ApiError(api) => Self::Api(api.message),
            OpenAIError::JSONDeserialize(e) => Self::Api(format!("malformed response: {e}")),
            other => Self::Request(other.to_string()),
        }
    }
}
