//! Speech collaborator clients: transcription (STT) and synthesis (TTS).
//!
//! The engine never talks to these itself; routes call them and feed the
//! engine plain text. Both endpoints are plain HTTP services configured
//! through the environment.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Transcription error: {0}")]
    Transcription(String),
    #[error("Synthesis error: {0}")]
    Synthesis(String),
}

#[derive(Debug, serde::Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Debug, serde::Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
}

/// HTTP client for the speech-to-text and text-to-speech services.
pub struct SpeechService {
    client: reqwest::Client,
    stt_url: String,
    tts_url: String,
}

impl SpeechService {
    /// Create a new speech service from environment variables.
    ///
    /// Required env vars:
    /// - STT_URL: transcription endpoint, accepts a WAV body, returns `{ "text": ... }`
    /// - TTS_URL: synthesis endpoint, accepts `{ "text": ... }`, returns WAV bytes
    pub fn new() -> Result<Self, SpeechError> {
        let stt_url = std::env::var("STT_URL")
            .map_err(|_| SpeechError::Config("STT_URL not set".to_string()))?;
        let tts_url = std::env::var("TTS_URL")
            .map_err(|_| SpeechError::Config("TTS_URL not set".to_string()))?;

        Ok(Self {
            client: reqwest::Client::new(),
            stt_url,
            tts_url,
        })
    }

    /// Transcribe captured audio to plain text.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<String, SpeechError> {
        let response = self
            .client
            .post(&self.stt_url)
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(audio)
            .send()
            .await
            .map_err(|e| SpeechError::Transcription(e.to_string()))?
            .error_for_status()
            .map_err(|e| SpeechError::Transcription(e.to_string()))?;

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::Transcription(e.to_string()))?;

        tracing::info!("Transcribed {} characters of speech", body.text.len());
        Ok(body.text)
    }

    /// Synthesize a reference pronunciation of a line, as WAV bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let response = self
            .client
            .post(&self.tts_url)
            .json(&SynthesisRequest { text })
            .send()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?
            .error_for_status()
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Synthesis(e.to_string()))?
            .to_vec();

        tracing::info!("Synthesized {} bytes of reference audio", bytes.len());
        Ok(bytes)
    }
}
