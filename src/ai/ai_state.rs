//! AI request bookkeeping on the UI side
//!
//! Owns the channel handles to the worker thread, assigns request ids, and
//! cancels the in-flight request when a new one starts. Stale responses
//! (from a superseded request) are dropped during polling.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tokio_util::sync::CancellationToken;

/// Request messages sent to the worker thread
#[derive(Debug)]
pub enum AiRequest {
    Generate {
        prompt: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
        /// Token the worker races against the HTTP call
        cancel_token: CancellationToken,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiResponse {
    Completed { text: String, request_id: u64 },
    Error { message: String, request_id: u64 },
    Cancelled { request_id: u64 },
}

impl AiResponse {
    fn request_id(&self) -> u64 {
        match self {
            AiResponse::Completed { request_id, .. }
            | AiResponse::Error { request_id, .. }
            | AiResponse::Cancelled { request_id } => *request_id,
        }
    }
}

/// UI-side AI state
pub struct AiState {
    /// Whether AI features are enabled (from config)
    pub enabled: bool,
    /// Whether a usable client could be built from config
    pub configured: bool,
    request_tx: Option<Sender<AiRequest>>,
    response_rx: Option<Receiver<AiResponse>>,
    next_request_id: u64,
    in_flight: Option<u64>,
    cancel_token: Option<CancellationToken>,
}

impl AiState {
    pub fn new(enabled: bool, configured: bool) -> Self {
        Self {
            enabled,
            configured,
            request_tx: None,
            response_rx: None,
            next_request_id: 0,
            in_flight: None,
            cancel_token: None,
        }
    }

    /// Attach the worker channels.
    pub fn set_channels(&mut self, tx: Sender<AiRequest>, rx: Receiver<AiResponse>) {
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Dispatch a request, cancelling any in-flight one first.
    ///
    /// Returns the request id, or None when no worker is attached.
    pub fn begin_request(&mut self, prompt: String) -> Option<u64> {
        self.request_tx.as_ref()?;

        self.cancel_in_flight();

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let cancel_token = CancellationToken::new();
        let send_result = self.request_tx.as_ref()?.send(AiRequest::Generate {
            prompt,
            request_id,
            cancel_token: cancel_token.clone(),
        });

        if send_result.is_err() {
            // Worker is gone; nothing will ever answer
            log::error!("AI worker channel closed");
            return None;
        }

        self.in_flight = Some(request_id);
        self.cancel_token = Some(cancel_token);
        Some(request_id)
    }

    /// Cancel the in-flight request, if any.
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        self.in_flight = None;
    }

    /// Drain worker responses, dropping any that belong to superseded
    /// requests. A terminal response for the current request clears the
    /// in-flight marker.
    pub fn poll(&mut self) -> Vec<AiResponse> {
        let rx = match self.response_rx.as_ref() {
            Some(rx) => rx,
            None => return Vec::new(),
        };

        let mut responses = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if Some(response.request_id()) != self.in_flight {
                        continue; // Stale
                    }
                    self.in_flight = None;
                    self.cancel_token = None;
                    responses.push(response);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::error!("AI worker disconnected");
                    break;
                }
            }
        }

        responses
    }
}

#[cfg(test)]
#[path = "ai_state_tests.rs"]
mod ai_state_tests;
