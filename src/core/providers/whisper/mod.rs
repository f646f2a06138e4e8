//! Hosted Whisper speech-to-text client
//!
//! Talks to Groq's OpenAI-compatible `audio/transcriptions` endpoint.

mod client;
mod config;
mod error;
mod types;

pub use client::WhisperClient;
pub use config::WhisperConfig;
pub use error::WhisperError;
pub use types::TranscriptionResponse;

/// Maximum upload size accepted by the endpoint (25MB)
pub const MAX_FILE_SIZE: usize = 25 * 1024 * 1024;
