//! Text summarization service
//!
//! Wraps the Gemini client with the fixed summary prompt and the fallback
//! string used when the API answers without any text.

use crate::core::providers::gemini::{GeminiClient, GeminiError};
use crate::utils::error::{Result, ServiceError};
use tracing::{debug, info};

/// Model pinned for direct text summarization requests
pub const SUMMARIZE_MODEL: &str = "gemini-2.5-pro-exp-03-25";

/// Returned when the API produced no usable text
pub const EMPTY_SUMMARY_FALLBACK: &str = "Sorry, I couldn't generate a summary.";

const SUMMARY_PROMPT_PREFIX: &str = "Summarize the following text. Text: ";

/// Build the prompt sent to the generative-text API
pub(crate) fn summary_prompt(text: &str) -> String {
    format!("{}{}", SUMMARY_PROMPT_PREFIX, text)
}

/// Summarization service
pub struct SummarizeService {
    client: GeminiClient,
}

impl SummarizeService {
    /// Create a new summarization service
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Summarize text with the pinned summarization model
    pub async fn summarize(&self, text: &str) -> Result<String> {
        self.generate(SUMMARIZE_MODEL, text)
            .await
            .map_err(|e| ServiceError::Summarization(e.to_string()))
    }

    /// Run the summary prompt against a specific model
    ///
    /// The audio pipeline reuses this with its own pinned model; provider
    /// errors are passed through untouched so each caller can wrap them in
    /// its own error class.
    pub(crate) async fn generate(
        &self,
        model: &str,
        text: &str,
    ) -> std::result::Result<String, GeminiError> {
        info!("Summarization request: model={}, {} chars", model, text.len());

        let prompt = summary_prompt(text);
        match self.client.generate_text(model, &prompt).await? {
            Some(summary) => Ok(summary),
            None => {
                debug!("API returned no text, using fallback summary");
                Ok(EMPTY_SUMMARY_FALLBACK.to_string())
            }
        }
    }
}
