//! Whisper API types

use serde::Deserialize;

/// Transcription response (OpenAI compatible)
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,

    /// Task type (always "transcribe")
    pub task: Option<String>,

    /// Detected or specified language
    pub language: Option<String>,

    /// Duration of the audio in seconds
    pub duration: Option<f64>,
}

impl TranscriptionResponse {
    /// Wrap a plain-text body the way the JSON response format would
    pub fn from_plain_text(text: String) -> Self {
        Self {
            text,
            task: Some("transcribe".to_string()),
            language: None,
            duration: None,
        }
    }
}

/// Content type for an uploaded audio file, guessed from its extension
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "mp3" | "mpga" | "mpeg" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
