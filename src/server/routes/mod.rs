//! HTTP route modules
//!
//! One file per endpoint, plus the shared error-response helpers.

mod process_audio;
mod summarize;

pub use process_audio::process_audio;
pub use summarize::summarize;

use actix_web::{HttpResponse, http::Method, web};

/// Configure the API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/summarize", web::post().to(summarize))
        .route("/summarize", web::route().method(Method::OPTIONS).to(preflight))
        .route("/processAudio", web::post().to(process_audio))
        .route("/processAudio", web::route().method(Method::OPTIONS).to(preflight));
}

/// Empty response for OPTIONS requests
///
/// Browser preflights are answered by the CORS middleware before they get
/// here; this covers plain OPTIONS probes so they do not 405.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Error response helpers
pub mod errors {
    use crate::utils::error::{ErrorBody, ServiceError};
    use actix_web::{HttpResponse, ResponseError};

    /// Convert a ServiceError to its JSON HTTP response
    pub fn service_error_to_response(error: &ServiceError) -> HttpResponse {
        HttpResponse::build(error.status_code()).json(ErrorBody {
            error: error.to_string(),
        })
    }

    /// Create a client-error response
    pub fn validation_error(message: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ErrorBody {
            error: message.to_string(),
        })
    }
}
