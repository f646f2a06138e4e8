//! Google Gemini client
//!
//! Thin wrapper over the Google AI Studio `generateContent` endpoint,
//! used here for text summarization.

mod client;
mod config;
mod error;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::GeminiError;
