//! Whisper error types

use thiserror::Error;

/// Whisper-specific error types
#[derive(Debug, Error)]
pub enum WhisperError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl WhisperError {
    /// Map a non-success HTTP status to a typed error
    pub fn from_http_status(status: u16, body: Option<String>) -> Self {
        match status {
            400 => WhisperError::InvalidRequest(
                body.unwrap_or_else(|| "Invalid audio format or parameters".to_string()),
            ),
            401 => WhisperError::Authentication("Invalid API key".to_string()),
            413 => WhisperError::InvalidRequest("Audio file too large (max 25MB)".to_string()),
            429 => WhisperError::RateLimit("Rate limit exceeded".to_string()),
            _ => WhisperError::Api(format!(
                "Transcription failed with status {}: {}",
                status,
                body.unwrap_or_default()
            )),
        }
    }
}
