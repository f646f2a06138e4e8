//! Configuration management for the service
//!
//! Configuration is read once at boot from environment variables (with
//! `.env` support) and stays immutable for the lifetime of the process.
//! The process refuses to start when a required upstream API key is
//! missing.

use crate::core::providers::gemini::GeminiConfig;
use crate::core::providers::whisper::WhisperConfig;
use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Directory the index page and other static assets are served from
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: "./static".to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate server settings
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// CORS settings applied to the whole HTTP surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any origin
    pub allowed_origins: Vec<String>,
    /// Allowed HTTP methods
    pub allowed_methods: Vec<String>,
    /// Allowed request headers
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            max_age: 3600,
        }
    }
}

impl CorsConfig {
    /// Whether any origin is allowed
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }

    /// Validate CORS settings
    pub fn validate(&self) -> std::result::Result<(), String> {
        for m in &self.allowed_methods {
            if m.parse::<actix_web::http::Method>().is_err() {
                return Err(format!("Invalid HTTP method: {}", m));
            }
        }
        Ok(())
    }
}

/// Main configuration struct for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Generative-text API settings
    pub gemini: GeminiConfig,
    /// Speech-recognition API settings
    pub whisper: WhisperConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required: `GEMINI_API_KEY`, `GROQ_API_KEY`. Optional: `HOST`, `PORT`,
    /// `STATIC_DIR`, `GEMINI_API_BASE`, `GROQ_API_BASE`.
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut server = ServerConfig::default();
        if let Ok(host) = env::var("HOST") {
            server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            server.port = port
                .parse()
                .map_err(|e| ServiceError::config(format!("Invalid port: {}", e)))?;
        }
        if let Ok(static_dir) = env::var("STATIC_DIR") {
            server.static_dir = static_dir;
        }

        let mut gemini = GeminiConfig::new(require_env("GEMINI_API_KEY")?);
        if let Ok(base_url) = env::var("GEMINI_API_BASE") {
            gemini.base_url = base_url;
        }

        let mut whisper = WhisperConfig::new(require_env("GROQ_API_KEY")?);
        if let Ok(api_base) = env::var("GROQ_API_BASE") {
            whisper.api_base = api_base;
        }

        let config = Self {
            server,
            cors: CorsConfig::default(),
            gemini,
            whisper,
        };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .validate()
            .map_err(|e| ServiceError::config(format!("Server config error: {}", e)))?;

        self.cors
            .validate()
            .map_err(|e| ServiceError::config(format!("CORS config error: {}", e)))?;

        self.gemini
            .validate()
            .map_err(|e| ServiceError::config(format!("Gemini config error: {}", e)))?;

        self.whisper
            .validate()
            .map_err(|e| ServiceError::config(format!("Whisper config error: {}", e)))?;

        Ok(())
    }
}

/// Read a required environment variable, rejecting blank values
fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ServiceError::config(format!(
            "{} environment variable is not set",
            name
        ))),
    }
}
