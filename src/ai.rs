//! Gemini integration
//!
//! HTTP calls run on a background worker thread with a tokio runtime;
//! the UI talks to it over channels and cancels in-flight requests with a
//! CancellationToken. Raw API errors pass through [`friendly`] before they
//! reach the user.

mod ai_state;
pub mod friendly;
pub mod prompt;
pub mod provider;
pub mod worker;

pub use ai_state::{AiRequest, AiResponse, AiState};
