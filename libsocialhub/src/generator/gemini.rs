//! Gemini generateContent client
//!
//! Thin wire client for the single external exchange of the composer:
//! POST a prompt, read back `candidates[0].content.parts[0].text`. Any
//! response lacking that field, or any non-success status, is a failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TextModel;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;

/// Client for the Gemini REST generateContent endpoint.
///
/// The API key is resolved from the configured environment variable when
/// the client is built; a missing key is reported before any request is
/// issued.
pub struct GeminiModel {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiModel {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: std::env::var(&config.api_key_env).ok().filter(|k| !k.is_empty()),
        }
    }

    fn request_url(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        )
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.request_url(api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        extract_text(&body)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Pull the first candidate's text out of a response, failing on any
/// missing link in the chain
fn extract_text(response: &GenerateContentResponse) -> Result<String, GenerationError> {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|c| c.parts.first())
        .and_then(|p| p.text.as_deref())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .ok_or(GenerationError::MalformedResponse)
}
