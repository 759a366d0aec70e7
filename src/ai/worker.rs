//! AI worker thread
//!
//! Handles Gemini requests in a background thread so the UI never blocks on
//! HTTP. Receives requests via channel, makes the API call on a dedicated
//! tokio runtime, and sends the outcome back to the main thread.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use super::ai_state::{AiRequest, AiResponse};
use super::provider::{AiError, GeminiClient};
use crate::config::ai_types::AiConfig;

/// Spawn the worker thread.
///
/// The client is built from config up front; when that fails (missing key,
/// AI disabled) the worker stays alive and answers every request with the
/// configuration error, so toggling AI on later still gets feedback.
pub fn spawn_worker(
    config: &AiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client_result = GeminiClient::from_config(config);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("failed to create AI worker runtime: {}", e);
                return;
            }
        };

        rt.block_on(worker_loop(client_result, request_rx, response_tx));
    });
}

/// Process requests until the channel closes.
///
/// Blocking `recv()` is fine here - this is a dedicated thread.
async fn worker_loop(
    client_result: Result<GeminiClient, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client = match client_result {
        Ok(client) => Some(client),
        Err(e) => {
            log::warn!("AI worker running without a client: {}", e);
            None
        }
    };

    while let Ok(request) = request_rx.recv() {
        let AiRequest::Generate {
            prompt,
            request_id,
            cancel_token,
        } = request;

        handle_generate(
            client.as_ref(),
            &prompt,
            request_id,
            cancel_token,
            &response_tx,
        )
        .await;
    }
}

async fn handle_generate(
    client: Option<&GeminiClient>,
    prompt: &str,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: &Sender<AiResponse>,
) {
    if cancel_token.is_cancelled() {
        let _ = response_tx.send(AiResponse::Cancelled { request_id });
        return;
    }

    let client = match client {
        Some(client) => client,
        None => {
            let _ = response_tx.send(AiResponse::Error {
                message: "AI not configured. Set GEMINI_API_KEY or add 'api_key' in the \
                          [ai.gemini] section of your config."
                    .to_string(),
                request_id,
            });
            return;
        }
    };

    match client.generate_with_cancel(prompt, cancel_token).await {
        Ok(text) => {
            let _ = response_tx.send(AiResponse::Completed { text, request_id });
        }
        Err(AiError::Cancelled) => {
            let _ = response_tx.send(AiResponse::Cancelled { request_id });
        }
        Err(e) => {
            let _ = response_tx.send(AiResponse::Error {
                message: e.to_string(),
                request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
