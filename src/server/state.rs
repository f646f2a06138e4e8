//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::gemini::GeminiClient;
use crate::core::providers::whisper::WhisperClient;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Holds the immutable configuration and one client per upstream API.
/// Everything here is cheap to clone; the clients share their connection
/// pools internally.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Generative-text API client
    pub gemini: GeminiClient,
    /// Speech-recognition API client
    pub whisper: WhisperClient,
}

impl AppState {
    /// Build the shared state from a loaded configuration
    pub fn from_config(config: Config) -> Self {
        let gemini = GeminiClient::new(config.gemini.clone());
        let whisper = WhisperClient::new(config.whisper.clone());

        Self {
            config: Arc::new(config),
            gemini,
            whisper,
        }
    }
}
