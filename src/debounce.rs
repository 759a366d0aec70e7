//! Debounced dispatch for API requests
//!
//! Delays Gemini calls until input stabilizes so rapid submit presses are
//! batched into a single request.

use std::time::{Duration, Instant};

const DEFAULT_DELAY_MS: u64 = 250;

/// Tracks when the last trigger occurred and whether a dispatch is pending.
///
/// Each `schedule` resets the timer; the pending dispatch becomes ready once
/// the configured delay has elapsed since the last trigger.
#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u64,
    last_input_time: Option<Instant>,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_input_time: None,
            pending: false,
        }
    }

    /// Schedule a dispatch after the debounce delay, resetting the timer.
    pub fn schedule(&mut self) {
        self.last_input_time = Some(Instant::now());
        self.pending = true;
    }

    /// Cancel any pending dispatch.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    /// True once a pending dispatch has waited out the delay.
    pub fn is_ready(&self) -> bool {
        if !self.pending {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => last_time.elapsed() >= Duration::from_millis(self.delay_ms),
            None => false,
        }
    }

    /// Mark the pending dispatch as done.
    pub fn mark_complete(&mut self) {
        self.pending = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}
