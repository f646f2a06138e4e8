//! Gemini configuration

use serde::{Deserialize, Serialize};

/// Settings for the Google AI Studio endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL; overridable so tests can point at a local mock server
    pub base_url: String,
    /// API version segment
    pub api_version: String,
}

impl GeminiConfig {
    /// Create a configuration for Google AI Studio
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_version: "v1beta".to_string(),
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Full URL for a model operation, e.g. `generateContent`
    pub fn endpoint(&self, model: &str, operation: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            model,
            operation
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("API key must not be empty".to_string());
        }
        if self.base_url.trim().is_empty() {
            return Err("Base URL must not be empty".to_string());
        }
        Ok(())
    }
}
