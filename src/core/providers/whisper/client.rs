//! Whisper API client
//!
//! Uploads audio as multipart form data and handles both JSON and
//! plain-text response bodies.

use reqwest::{Client, multipart};
use tracing::debug;

use super::MAX_FILE_SIZE;
use super::config::WhisperConfig;
use super::error::WhisperError;
use super::types::{TranscriptionResponse, content_type_for};

/// Whisper API client
#[derive(Debug, Clone)]
pub struct WhisperClient {
    config: WhisperConfig,
    http_client: Client,
}

impl WhisperClient {
    /// Create a new client
    pub fn new(config: WhisperConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Transcribe an audio file
    pub async fn transcribe(
        &self,
        file: Vec<u8>,
        filename: &str,
        model: &str,
    ) -> Result<TranscriptionResponse, WhisperError> {
        if file.len() > MAX_FILE_SIZE {
            return Err(WhisperError::InvalidRequest(
                "Audio file too large (max 25MB)".to_string(),
            ));
        }

        debug!(
            "Whisper request: model={}, file_size={}, filename={}",
            model,
            file.len(),
            filename
        );

        let file_part = multipart::Part::bytes(file)
            .file_name(filename.to_string())
            .mime_str(content_type_for(filename))
            .map_err(|e| WhisperError::InvalidRequest(format!("Invalid MIME type: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", model.to_string())
            .text("response_format", "json");

        let response = self
            .http_client
            .post(self.config.transcription_endpoint())
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| WhisperError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.ok();
            return Err(WhisperError::from_http_status(status, body));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| WhisperError::Api(format!("Failed to read response: {}", e)))?;

        // Some response formats come back as plain text rather than JSON
        match serde_json::from_str::<TranscriptionResponse>(&response_text) {
            Ok(json_response) => Ok(json_response),
            Err(_) => Ok(TranscriptionResponse::from_plain_text(response_text)),
        }
    }
}
