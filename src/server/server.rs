//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the application factory
//! used both by the real server and by the integration tests.

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::DefaultHeaders,
    web,
};
use std::path::Path;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Self {
        info!("Creating HTTP server");

        let state = AppState::from_config(config.clone());

        Self {
            config: config.server.clone(),
            state,
        }
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        let port = self.config.port;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || build_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ServiceError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Create the Actix-web application
///
/// Shared by `HttpServer::start` and the test harness so both exercise the
/// same middleware stack and routes.
pub fn build_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = build_cors(&state.config.cors);
    let static_dir = state.config.server.static_dir.clone();

    let mut app = App::new()
        .app_data(state)
        .wrap(cors)
        .wrap(TracingLogger::default())
        .wrap(DefaultHeaders::new().add(("Server", "voicebrief")))
        .route("/health", web::get().to(health_check))
        .configure(routes::configure);

    // The index page is optional; API-only deployments run without it
    if Path::new(&static_dir).is_dir() {
        app = app.service(Files::new("/", &static_dir).index_file("index.html"));
    } else {
        warn!("Static directory {:?} not found, index page disabled", static_dir);
    }

    app
}

/// Assemble the CORS middleware from configuration
fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();

    if config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    let headers: Vec<actix_web::http::header::HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    if !headers.is_empty() {
        cors = cors.allowed_headers(headers);
    }

    cors.max_age(config.max_age as usize)
}

/// Turn a bind failure into an actionable error message
fn format_bind_error(e: std::io::Error, bind_addr: &str, port: u16) -> ServiceError {
    match e.kind() {
        std::io::ErrorKind::AddrInUse => ServiceError::config(format!(
            "Port {} is already in use. Stop the other process or set PORT to a free port.",
            port
        )),
        std::io::ErrorKind::PermissionDenied => ServiceError::config(format!(
            "Permission denied binding {}. Ports below 1024 need elevated privileges.",
            bind_addr
        )),
        _ => ServiceError::config(format!("Failed to bind {}: {}", bind_addr, e)),
    }
}
