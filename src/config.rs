//! Runtime configuration.
//!
//! The only required value is the API key. It comes from the process
//! environment, which `load_dotenv` seeds from a local `.env` file at
//! startup. The config is passed explicitly to the generation client and is
//! never read from global state afterwards.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the endpoint base URL.
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

/// Gemini's OpenAI-compatible endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Loads `.env` from the current directory or its parents, if present.
///
/// Existing environment variables are not overridden. Returns the path
/// that was loaded. Runs before logging is set up, so the caller logs the
/// outcome.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Generation client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key; `None` when unset or empty.
    pub api_key: Option<String>,
    /// Endpoint base URL.
    pub api_base: String,
}

impl Config {
    /// Builds a config from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use interview_analyzer::config::{Config, DEFAULT_API_BASE};
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "GOOGLE_API_KEY" => Some("test-key".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.api_key.as_deref(), Some("test-key"));
    /// assert_eq!(config.api_base, DEFAULT_API_BASE);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty(API_KEY_VAR),
            api_base: non_empty(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Replaces the endpoint base URL.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Checks that generation can proceed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is set, or
    /// [`ConfigError::InvalidValue`] if the base URL is not http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey { var: API_KEY_VAR });
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                var: API_BASE_VAR,
                reason: format!("expected an http(s) URL, got {:?}", self.api_base),
            });
        }
        Ok(())
    }
}

// The key is redacted so configs can be logged.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_reads_key_and_base() {
        let config = Config::from_lookup(lookup_from(&[
            (API_KEY_VAR, "abc123"),
            (API_BASE_VAR, "http://localhost:8080/v1"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.api_base, "http://localhost:8080/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_is_missing() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "   ")]));
        assert_eq!(config.api_key, None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingApiKey { var: API_KEY_VAR })
        );
    }

    #[test]
    fn test_invalid_base() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "k")]))
            .with_api_base("ftp://example.com");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { var: API_BASE_VAR, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "super-secret")]));
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
