//! Whisper configuration

use serde::{Deserialize, Serialize};

/// Settings for the Groq-hosted Whisper endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhisperConfig {
    /// API key, sent as a Bearer token
    pub api_key: String,
    /// API base; overridable so tests can point at a local mock server
    pub api_base: String,
}

impl WhisperConfig {
    /// Create a configuration with the default Groq API base
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: "https://api.groq.com/openai/v1".to_string(),
        }
    }

    /// Override the API base
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Full URL of the transcription endpoint
    pub fn transcription_endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.api_base.trim_end_matches('/'))
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key must not be empty".to_string());
        }
        if self.api_base.trim().is_empty() {
            return Err("API base must not be empty".to_string());
        }
        Ok(())
    }
}
