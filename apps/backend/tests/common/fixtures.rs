//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// A short three-line practice document.
pub fn sample_story() -> &'static str {
    "The quick brown fox jumps over the lazy dog\n\nReading practice makes perfect\nThe end\n"
}

/// Create a session creation request body.
pub fn create_session_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Create a session creation request body with explicit settings.
pub fn create_session_request_with_settings(
    text: &str,
    settings: serde_json::Value,
) -> serde_json::Value {
    json!({ "text": text, "settings": settings })
}

/// Create an attempt request body.
pub fn attempt_request(transcript: &str) -> serde_json::Value {
    json!({ "transcript": transcript })
}

/// Create a question request body.
pub fn question_request(question: &str) -> serde_json::Value {
    json!({ "question": question })
}

/// A minimal valid WAV file: 16 kHz mono 16-bit PCM, 0.1 s of silence.
pub fn silent_wav() -> Vec<u8> {
    let sample_rate: u32 = 16_000;
    let samples: u32 = sample_rate / 10;
    let data_len = samples * 2;

    let mut wav = Vec::with_capacity(44 + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes());
    wav.extend_from_slice(&16u16.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.resize(44 + data_len as usize, 0);
    wav
}

/// Create an update settings request body.
pub fn update_settings_request(
    aligner: Option<&str>,
    similarity_threshold: Option<f64>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(a) = aligner {
        obj.insert("aligner".to_string(), json!(a));
    }
    if let Some(t) = similarity_threshold {
        obj.insert("similarity_threshold".to_string(), json!(t));
    }
    serde_json::Value::Object(obj)
}
