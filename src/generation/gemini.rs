//! Gemini client over the OpenAI-compatible chat-completions endpoint.

use super::{SUMMARY_MODEL, TextGenerator};
use crate::config::Config;
use crate::error::GenerationError;
use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::debug;

/// Blocking Gemini client.
///
/// Each call runs on a fresh current-thread runtime, so callers stay
/// synchronous. No timeout is set and rate-limit retries are disabled.
pub struct GeminiClient {
    client: Client<OpenAIConfig>,
    has_credential: bool,
    api_base: String,
}

impl GeminiClient {
    /// Creates a client from an explicit configuration.
    ///
    /// A missing API key is not an error here; every call will fail with
    /// [`GenerationError::MissingCredential`] instead.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_base(config.api_base.clone());
        if let Some(key) = &config.api_key {
            openai_config = openai_config.with_api_key(key.clone());
        }

        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(no_retry),
            has_credential: config.api_key.is_some(),
            api_base: config.api_base.clone(),
        }
    }

    /// Creates a client only if the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the key is missing or the base
    /// URL is invalid.
    pub fn try_new(config: &Config) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Endpoint base URL this client talks to.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl TextGenerator for GeminiClient {
    fn model(&self) -> &str {
        SUMMARY_MODEL
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        if !self.has_credential {
            return Err(GenerationError::MissingCredential);
        }

        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?
            .into();
        let request = CreateChatCompletionRequestArgs::default()
            .model(SUMMARY_MODEL)
            .messages(vec![message])
            .build()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerationError::Runtime(e.to_string()))?;

        debug!(api_base = %self.api_base, "Sending chat completion request");
        let response = runtime.block_on(self.client.chat().create(request))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_is_pinned() {
        let client = GeminiClient::new(&Config::from_lookup(|_| None));
        assert_eq!(client.model(), "gemini-2.5-pro-exp-03-25");
    }

    #[test]
    fn test_missing_credential_fails_without_network() {
        let client = GeminiClient::new(&Config::from_lookup(|_| None));
        assert_eq!(
            client.generate("prompt"),
            Err(GenerationError::MissingCredential)
        );
    }

    #[test]
    fn test_try_new_rejects_missing_key() {
        let result = GeminiClient::try_new(&Config::from_lookup(|_| None));
        assert!(matches!(
            result,
            Err(crate::Error::Config(crate::error::ConfigError::MissingApiKey { .. }))
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_request_error() {
        let config = Config::from_lookup(|key| {
            (key == crate::config::API_KEY_VAR).then(|| "test-key".to_string())
        })
        .with_api_base("http://127.0.0.1:9/v1");
        let client = GeminiClient::new(&config);

        assert_eq!(client.api_base(), "http://127.0.0.1:9/v1");
        assert!(matches!(
            client.generate("prompt"),
            Err(GenerationError::Request(_))
        ));
    }
}
