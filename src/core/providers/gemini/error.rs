//! Gemini error types and error mapping
//!
//! Handles error conversion from Gemini API responses. Google reports
//! failures both as HTTP statuses and as an `error` object inside an
//! otherwise-200 body; both paths land here.

use serde_json::Value;
use thiserror::Error;

/// Gemini-specific error types
#[derive(Debug, Error)]
pub enum GeminiError {
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

    #[error("Response parsing error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// Map a non-success HTTP status to a typed error
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            400 => GeminiError::InvalidRequest(body.to_string()),
            401 | 403 => GeminiError::Authentication("Invalid or missing API key".to_string()),
            404 => GeminiError::InvalidRequest("Model or endpoint not found".to_string()),
            429 => GeminiError::RateLimit(body.to_string()),
            _ => GeminiError::Api(format!("HTTP {}: {}", status, body)),
        }
    }

    /// Map an API-level `error` object embedded in a response body
    pub fn from_api_response(response: &Value) -> Self {
        if let Some(error) = response.get("error") {
            let code = error.get("code").and_then(|c| c.as_u64()).unwrap_or(500) as u16;
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            let status = error.get("status").and_then(|s| s.as_str()).unwrap_or("");

            return match (code, status) {
                (401, _) | (_, "UNAUTHENTICATED") => {
                    GeminiError::Authentication(message.to_string())
                }
                (403, _) | (_, "PERMISSION_DENIED") => {
                    GeminiError::Authentication(message.to_string())
                }
                (400, _) | (_, "INVALID_ARGUMENT") => {
                    GeminiError::InvalidRequest(message.to_string())
                }
                (429, _) | (_, "RESOURCE_EXHAUSTED") => GeminiError::RateLimit(message.to_string()),
                _ => GeminiError::Api(message.to_string()),
            };
        }

        GeminiError::Api("Unknown API error".to_string())
    }
}
