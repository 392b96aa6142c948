//! Question-answering collaborator client.
//!
//! Talks to an Ollama-style `/api/generate` endpoint, passing the document
//! text as context for questions about the story being read.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Language model error: {0}")]
    Model(String),
}

#[derive(Debug, serde::Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, serde::Serialize)]
struct GenerateOptions {
    temperature: f64,
}

#[derive(Debug, serde::Deserialize)]
struct GenerateResponse {
    response: String,
}

/// HTTP client for the question-answering language model.
pub struct AnswerService {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl AnswerService {
    /// Create a new answer service from environment variables.
    ///
    /// Required env vars:
    /// - LLM_URL: base URL of the Ollama-compatible server
    ///
    /// Optional:
    /// - LLM_MODEL: model name (default "llama3.2:3b")
    pub fn new() -> Result<Self, AnswerError> {
        let base_url = std::env::var("LLM_URL")
            .map_err(|_| AnswerError::Config("LLM_URL not set".to_string()))?;
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.2:3b".to_string());

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            model,
        })
    }

    /// Answer a question using the document text as context.
    pub async fn answer(&self, question: &str, context: &str) -> Result<String, AnswerError> {
        let prompt = format!(
            "Context: {context}\nQuestion: {question}\nPlease provide a brief answer based on the given context."
        );

        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions { temperature: 0.1 },
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AnswerError::Model(e.to_string()))?
            .error_for_status()
            .map_err(|e| AnswerError::Model(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnswerError::Model(e.to_string()))?;

        tracing::info!("Answered question with {} characters", body.response.len());
        Ok(body.response)
    }
}
