//! Audio transcription + summarization endpoint

use crate::core::audio::AudioService;
use crate::core::summarize::SummarizeService;
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult, web};
use futures::StreamExt;
use tracing::{error, info, warn};

/// Audio processing endpoint
///
/// Accepts a multipart upload with an `audio` file field, transcribes it,
/// and summarizes the transcript when one came back. The whole file is
/// buffered in memory before it is forwarded upstream.
pub async fn process_audio(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    info!("Process audio request");

    let mut file_data: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(f) => f,
            Err(e) => {
                warn!("Error reading multipart field: {}", e);
                return Ok(errors::validation_error(&format!(
                    "Invalid multipart data: {}",
                    e
                )));
            }
        };

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        match field_name.as_str() {
            "audio" => {
                // Filename from the content disposition; browsers send an
                // empty one for an unselected file input
                if let Some(cd) = field.content_disposition() {
                    if let Some(name) = cd.get_filename() {
                        filename = Some(name.to_string());
                    }
                }

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(bytes) => data.extend_from_slice(&bytes),
                        Err(e) => {
                            let err = ServiceError::FileRead(e.to_string());
                            error!("{}", err);
                            return Ok(errors::service_error_to_response(&err));
                        }
                    }
                }
                file_data = Some(data);
            }
            _ => {
                // Skip unknown fields
                while field.next().await.is_some() {}
            }
        }
    }

    let file = match file_data {
        Some(data) => data,
        None => {
            warn!("Process audio request without an audio field");
            return Ok(errors::validation_error("No audio file provided"));
        }
    };

    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => {
            warn!("Process audio request with an unnamed file");
            return Ok(errors::validation_error("No audio file selected"));
        }
    };

    if file.is_empty() {
        warn!("Process audio request with an empty file");
        return Ok(errors::validation_error("Empty audio file"));
    }

    let service = AudioService::new(
        state.whisper.clone(),
        SummarizeService::new(state.gemini.clone()),
    );

    match service.process(file, &filename).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => {
            error!("Error processing audio: {}", e);
            Ok(errors::service_error_to_response(&e))
        }
    }
}
