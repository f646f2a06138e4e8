//! Server bootstrap
//!
//! Loads the environment, builds the configuration, and runs the server.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Run the server with configuration loaded from the environment
///
/// Reads a `.env` file when present, then requires `GEMINI_API_KEY` and
/// `GROQ_API_KEY`; a missing key aborts startup.
pub async fn run_server() -> Result<()> {
    info!("Starting voicebrief");

    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment overrides from .env");
    }

    let config = Config::from_env()?;
    let server = HttpServer::new(&config);

    info!(
        "Server starting at: http://{}:{}",
        config.server.host, config.server.port
    );
    info!("API Endpoints:");
    info!("   GET  /              - Index page");
    info!("   GET  /health        - Health check");
    info!("   POST /summarize     - Summarize raw text");
    info!("   POST /processAudio  - Transcribe and summarize an audio upload");

    server.start().await
}
