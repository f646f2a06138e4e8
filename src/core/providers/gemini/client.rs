//! Gemini API client
//!
//! Builds `generateContent` requests and extracts the generated text from
//! the candidate list. No request timeout is configured; a slow upstream
//! stalls only the request that called it.

use reqwest::{Client, Response};
use serde_json::{Value, json};
use tracing::debug;

use super::config::GeminiConfig;
use super::error::GeminiError;

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create a new client
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Generate text for a single prompt
    ///
    /// Returns `Ok(None)` when the API answered successfully but produced
    /// no text (no candidates, or candidates without text parts); callers
    /// decide what a missing summary means.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<Option<String>, GeminiError> {
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let url = self.config.endpoint(model, "generateContent");
        debug!("Gemini request: model={}", model);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        let json_response = self.handle_response(response).await?;
        Ok(extract_text(&json_response))
    }

    /// Check status and API-level errors, then parse the body
    async fn handle_response(&self, response: Response) -> Result<Value, GeminiError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| GeminiError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GeminiError::from_http_status(status.as_u16(), &response_text));
        }

        let json_response: Value = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response JSON: {}", e)))?;

        if json_response.get("error").is_some() {
            return Err(GeminiError::from_api_response(&json_response));
        }

        Ok(json_response)
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() { None } else { Some(text) }
}
