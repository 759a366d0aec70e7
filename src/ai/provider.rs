//! Gemini API client and error taxonomy
//!
//! Uses async/await with tokio for non-blocking requests and
//! CancellationToken for request cancellation. No retries: every failure is
//! terminal for that call and surfaced at most once.

use thiserror::Error;

mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur during Gemini operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AiError {
    /// Missing API key or AI disabled in config
    #[error("Gemini not configured: {0}")]
    NotConfigured(String),

    /// Network error during the API request
    #[error("network error: {0}")]
    Network(String),

    /// The API returned a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The API response body did not have the expected shape
    #[error("parse error: {0}")]
    Parse(String),

    /// Request was cancelled
    #[error("request cancelled")]
    Cancelled,
}
