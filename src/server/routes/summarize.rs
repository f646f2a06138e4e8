//! Text summarization endpoint

use crate::core::summarize::SummarizeService;
use crate::server::routes::errors;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Incoming summarization request
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize; a missing field is treated as empty
    #[serde(default)]
    pub text: String,
}

/// Outgoing summarization response
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    /// Generated summary
    pub summary: String,
}

/// Text summarization endpoint
///
/// Accepts `{"text": ...}`, forwards the trimmed text to the
/// generative-text API, and returns `{"summary": ...}`.
pub async fn summarize(
    state: web::Data<AppState>,
    request: web::Json<SummarizeRequest>,
) -> ActixResult<HttpResponse> {
    let text = request.text.trim();

    if text.is_empty() {
        warn!("Summarize request with empty text");
        return Ok(errors::validation_error("No text provided"));
    }

    info!("Summarize request: {} chars", text.len());

    let service = SummarizeService::new(state.gemini.clone());
    match service.summarize(text).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(SummarizeResponse { summary })),
        Err(e) => {
            error!("Error generating summary: {}", e);
            Ok(errors::service_error_to_response(&e))
        }
    }
}
