//! Async Gemini API client
//!
//! Single JSON POST to the Google Generative Language API, raced against a
//! CancellationToken. Uses reqwest for HTTP and tokio for the async runtime.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::AiError;
use crate::config::ai_types::AiConfig;

/// Gemini API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Generation parameters carried over from the service defaults
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const TOP_K: u32 = 40;

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
        }
    }

    /// Create a client from configuration.
    ///
    /// The `GEMINI_API_KEY` environment variable takes precedence over the
    /// config file key. Returns an error when AI is disabled or no key is
    /// available.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.enabled {
            return Err(AiError::NotConfigured(
                "AI is disabled. Set 'enabled = true' in the [ai] section of your config."
                    .to_string(),
            ));
        }

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                config
                    .gemini
                    .api_key
                    .as_ref()
                    .filter(|k| !k.trim().is_empty())
                    .cloned()
            })
            .ok_or_else(|| {
                AiError::NotConfigured(
                    "Missing API key. Set GEMINI_API_KEY or add 'api_key' in [ai.gemini]. \
                     Get a key at https://aistudio.google.com/apikey."
                        .to_string(),
                )
            })?;

        let model = config.gemini.model.trim();
        if model.is_empty() {
            return Err(AiError::NotConfigured(
                "Empty model. Remove 'model' from [ai.gemini] to use the default.".to_string(),
            ));
        }

        Ok(Self::new(
            api_key,
            model.to_string(),
            config.gemini.max_tokens,
        ))
    }

    /// Returns the configured model (used in tests)
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request URL: `{base}/{model}:generateContent?key={api_key}`
    fn build_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        )
    }

    /// Build the JSON request body for the generateContent call.
    fn build_request_body(&self, prompt: &str) -> RequestBody {
        RequestBody {
            contents: vec![ContentPayload {
                role: "user".to_string(),
                parts: vec![PartPayload {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: self.max_tokens,
            },
        }
    }

    /// Issue the request and return the generated text.
    ///
    /// Races the whole call against the cancellation token with
    /// `tokio::select!`; a cancelled request aborts the HTTP call and
    /// returns `AiError::Cancelled`.
    pub async fn generate_with_cancel(
        &self,
        prompt: &str,
        cancel_token: CancellationToken,
    ) -> Result<String, AiError> {
        if cancel_token.is_cancelled() {
            return Err(AiError::Cancelled);
        }

        let url = self.build_url();
        let body = self.build_request_body(prompt);

        let request = async {
            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| AiError::Network(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| AiError::Network(e.to_string()))?;

            if !status.is_success() {
                return Err(AiError::Api {
                    code: status.as_u16(),
                    message: api_error_message(status.as_u16(), &text),
                });
            }

            parse_response(&text)
        };

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => Err(AiError::Cancelled),
            result = request => result,
        }
    }
}

#[derive(Serialize)]
struct RequestBody {
    contents: Vec<ContentPayload>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct ContentPayload {
    role: String,
    parts: Vec<PartPayload>,
}

#[derive(Serialize)]
struct PartPayload {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Extract the generated text from a successful response body.
fn parse_response(body: &str) -> Result<String, AiError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AiError::Parse("response contained no candidates".to_string()))?;

    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default();

    let text: String = parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    if text.is_empty() {
        return Err(AiError::Parse(
            "response contained no text parts".to_string(),
        ));
    }

    Ok(text)
}

/// Prefer the server-supplied error message; fall back to a message derived
/// from the HTTP status.
fn api_error_message(code: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with HTTP status {}", code))
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
