//! # voicebrief
//!
//! A small HTTP backend that forwards user input to hosted AI inference APIs
//! and returns the results as JSON.
//!
//! ## Endpoints
//!
//! - `POST /summarize` accepts `{"text": ...}`, forwards it to a
//!   generative-text API (Gemini) with a fixed summary prompt, and returns
//!   `{"summary": ...}`.
//! - `POST /processAudio` accepts a multipart `audio` upload, transcribes it
//!   with a hosted Whisper model, then summarizes the transcript when it is
//!   non-empty, returning `{"transcript": ..., "summary": ...}`.
//! - `GET /` serves the static index page, `GET /health` the liveness check.
//!
//! Control flow is linear per request: validate, call the upstream API,
//! reshape the response. Client input errors come back as HTTP 400 and
//! upstream failures as HTTP 500, both with an `{"error": ...}` body.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voicebrief::config::Config;
//! use voicebrief::server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> voicebrief::Result<()> {
//!     // Requires GEMINI_API_KEY and GROQ_API_KEY in the environment
//!     let config = Config::from_env()?;
//!     HttpServer::new(&config).start().await
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{Result, ServiceError};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
