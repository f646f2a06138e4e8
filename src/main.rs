//! voicebrief - transcription and summarization backend
//!
//! Forwards user text and audio uploads to hosted AI inference APIs

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use voicebrief::server;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(false)
        .init();

    // Start server (loads configuration from the environment)
    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
