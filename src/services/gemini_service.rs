use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::GeminiConfig;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug)]
pub enum GeminiError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    ResponseError(String),
    ParseError(String),
    Timeout,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GeminiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeminiError::Timeout => write!(f, "Model request timed out"),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::HttpError(err)
        }
    }
}

impl From<serde_json::Error> for GeminiError {
    fn from(err: serde_json::Error) -> Self {
        GeminiError::ParseError(err.to_string())
    }
}

/// Client for the hosted text-generation model.
#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiService {
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single-turn prompt and return the concatenated text of the first candidate.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| GeminiError::EnvironmentError("GEMINI_API_KEY not set".to_string()))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        info!("Calling model {} ({} prompt chars)", self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GeminiError::ResponseError(format!(
                "Generation request failed with status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = Self::first_candidate_text(parsed)?;

        debug!("Model response preview: {}", preview(&text, 200));
        Ok(text)
    }

    fn first_candidate_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::ResponseError("No candidates returned".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeminiError::ResponseError(format!(
                "Empty candidate (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(text)
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_joins_candidate_parts() {
        let text = GeminiService::first_candidate_text(response(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] },
                "finishReason": "STOP"
            }]
        })))
        .unwrap();
        assert_eq!(text, "Hello, world");
    }

    #[test]
    fn test_empty_candidates_are_errors() {
        let err = GeminiService::first_candidate_text(response(json!({ "candidates": [] }))).unwrap_err();
        assert!(matches!(err, GeminiError::ResponseError(_)));

        let err = GeminiService::first_candidate_text(response(json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        })))
        .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo", 2), "hé...");
        assert_eq!(preview("hi", 10), "hi");
    }

    #[actix_rt::test]
    async fn test_missing_key_fails_without_network() {
        let service = GeminiService::new(&GeminiConfig::default()).unwrap();
        assert!(!service.is_configured());
        let err = service.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, GeminiError::EnvironmentError(_)));
    }
}
