//! Audio processing service
//!
//! Transcribes an uploaded file with the speech-recognition API and, when
//! any text came back, chains the transcript into the summarization
//! service. There is no retry or partial-failure recovery: the first
//! upstream error aborts the request.

use serde::Serialize;

use crate::core::providers::whisper::{MAX_FILE_SIZE, WhisperClient};
use crate::core::summarize::SummarizeService;
use crate::utils::error::{Result, ServiceError};
use tracing::{debug, info};

/// Model pinned for speech recognition
pub const TRANSCRIBE_MODEL: &str = "whisper-large-v3-turbo";

/// Model pinned for summarizing transcripts
///
/// Pinned separately from the direct `/summarize` model.
pub const TRANSCRIPT_SUMMARIZE_MODEL: &str = "gemini-2.0-flash";

/// Summary text used when the recognizer produced no transcript
pub const NO_TRANSCRIPT_NOTICE: &str = "No text transcribed to summarize.";

/// Result of the transcription + summarization chain
#[derive(Debug, Clone, Serialize)]
pub struct AudioSummary {
    /// Trimmed transcript, possibly empty
    pub transcript: String,
    /// Generated summary, or the fixed notice when nothing was transcribed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Audio service for handling upload processing requests
pub struct AudioService {
    whisper: WhisperClient,
    summarizer: SummarizeService,
}

impl AudioService {
    /// Create a new audio service
    pub fn new(whisper: WhisperClient, summarizer: SummarizeService) -> Self {
        Self { whisper, summarizer }
    }

    /// Transcribe the upload and summarize the transcript
    pub async fn process(&self, file: Vec<u8>, filename: &str) -> Result<AudioSummary> {
        if file.len() > MAX_FILE_SIZE {
            return Err(ServiceError::validation("Audio file too large (max 25MB)"));
        }

        info!("Processing audio upload: {} bytes ({})", file.len(), filename);

        let transcription = self
            .whisper
            .transcribe(file, filename, TRANSCRIBE_MODEL)
            .await
            .map_err(|e| ServiceError::AudioProcessing(e.to_string()))?;

        let transcript = transcription.text.trim().to_string();
        if transcript.is_empty() {
            debug!("Recognizer returned no text");
            return Ok(AudioSummary {
                transcript,
                summary: Some(NO_TRANSCRIPT_NOTICE.to_string()),
            });
        }

        let summary = self
            .summarizer
            .generate(TRANSCRIPT_SUMMARIZE_MODEL, &transcript)
            .await
            .map_err(|e| ServiceError::AudioProcessing(e.to_string()))?;

        Ok(AudioSummary {
            transcript,
            summary: Some(summary),
        })
    }
}
