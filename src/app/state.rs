use std::time::Duration;

use ratatui::layout::Rect;
use serde_json::json;

use super::input_state::InputState;
use super::lesson_state::LessonState;
use crate::ai::prompt::{self, Complexity, Depth, LessonKind};
use crate::ai::{AiResponse, AiState};
use crate::ai::friendly;
use crate::config::{ClipboardBackend, Config};
use crate::debounce::Debouncer;
use crate::history::{HistoryLog, HistoryState};
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::storage::{FileStore, KvStore, MemoryStore};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TopicInput,
    LessonPane,
}

/// Bookkeeping for the request currently in flight
#[derive(Debug, Clone)]
pub struct PendingLesson {
    pub request_id: u64,
    pub kind: LessonKind,
    pub topic: String,
    pub payload: serde_json::Value,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub focus: Focus,
    pub kind: LessonKind,
    pub depth: Depth,
    pub complexity: Complexity,
    pub lesson: LessonState,
    pub lesson_scroll: ScrollState,
    pub history_log: HistoryLog,
    pub history: HistoryState,
    pub notification: NotificationState,
    pub ai: AiState,
    pub debouncer: Debouncer,
    pub clipboard_backend: ClipboardBackend,
    /// Lesson pane area from the last render, for mouse scroll routing
    pub lesson_area: Rect,
    pending: Option<PendingLesson>,
    should_quit: bool,
    dirty: bool,
}

impl App {
    /// Create an App backed by the platform data directory.
    pub fn new(config: &Config) -> Self {
        let store: Box<dyn KvStore> = match FileStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                // History degrades to session-only
                log::warn!("falling back to in-memory history: {}", e);
                Box::new(MemoryStore::new())
            }
        };
        Self::with_store(store, config)
    }

    /// Create an App over an injected store (used in tests).
    pub fn with_store(store: Box<dyn KvStore>, config: &Config) -> Self {
        let configured = crate::ai::provider::GeminiClient::from_config(&config.ai).is_ok();

        Self {
            input: InputState::new(),
            focus: Focus::TopicInput,
            kind: LessonKind::default(),
            depth: Depth::default(),
            complexity: Complexity::default(),
            lesson: LessonState::new(),
            lesson_scroll: ScrollState::new(),
            history_log: HistoryLog::with_capacity(store, config.history.max_entries),
            history: HistoryState::new(),
            notification: NotificationState::with_timings(
                Duration::from_millis(config.notification.show_ms),
                Duration::from_millis(config.notification.exit_ms),
            ),
            ai: AiState::new(config.ai.enabled, configured),
            debouncer: Debouncer::new(config.ai.debounce_ms),
            clipboard_backend: config.clipboard.backend,
            lesson_area: Rect::default(),
            pending: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn pending(&self) -> Option<&PendingLesson> {
        self.pending.as_ref()
    }

    /// Cycle the lesson kind (Explain -> Code -> Audio script).
    pub fn cycle_kind(&mut self) {
        self.kind = self.kind.cycle();
    }

    /// Cycle the level relevant to the current kind.
    pub fn cycle_level(&mut self) {
        match self.kind {
            LessonKind::Explain => self.depth = self.depth.cycle(),
            LessonKind::Code => self.complexity = self.complexity.cycle(),
            LessonKind::AudioScript => {}
        }
    }

    /// Level label shown next to the kind badge.
    pub fn level_label(&self) -> Option<&'static str> {
        match self.kind {
            LessonKind::Explain => Some(self.depth.label()),
            LessonKind::Code => Some(self.complexity.label()),
            LessonKind::AudioScript => None,
        }
    }

    /// Validate the topic and schedule a debounced dispatch.
    ///
    /// Rapid submits within the debounce window collapse into one request.
    pub fn submit_topic(&mut self) {
        let topic = self.input.topic().trim().to_string();

        if topic.is_empty() {
            self.notification.warning("Topic is required");
            return;
        }

        if !self.ai.enabled {
            self.notification
                .error("AI is disabled. Set 'enabled = true' in the [ai] section of your config.");
            return;
        }

        self.debouncer.schedule();
    }

    /// Build the prompt for the current topic and hand it to the worker.
    /// Called from the event loop once the debouncer is ready.
    pub fn dispatch_request(&mut self) {
        let topic = self.input.topic().trim().to_string();
        if topic.is_empty() {
            return;
        }

        let prompt_text = prompt::build_prompt(self.kind, &topic, self.depth, self.complexity);

        let request_id = match self.ai.begin_request(prompt_text) {
            Some(id) => id,
            None => {
                self.notification.error(
                    "AI not configured. Set GEMINI_API_KEY or add 'api_key' in [ai.gemini].",
                );
                return;
            }
        };

        let payload = match self.kind {
            LessonKind::Explain => json!({"topic": &topic, "depth": self.depth.label()}),
            LessonKind::Code => json!({"topic": &topic, "complexity": self.complexity.label()}),
            LessonKind::AudioScript => json!({"topic": &topic}),
        };

        self.lesson.begin(&topic);
        self.pending = Some(PendingLesson {
            request_id,
            kind: self.kind,
            topic,
            payload,
        });
    }

    /// Drain worker responses. Returns true if anything changed.
    pub fn poll_ai(&mut self) -> bool {
        let responses = self.ai.poll();
        if responses.is_empty() {
            return false;
        }

        for response in responses {
            match response {
                AiResponse::Completed { text, request_id } => {
                    self.finish_lesson(text, request_id);
                }
                AiResponse::Error { message, .. } => {
                    self.lesson.abort();
                    self.pending = None;
                    self.notification
                        .error(&friendly::user_facing_message(&message));
                }
                AiResponse::Cancelled { .. } => {
                    self.lesson.abort();
                    self.pending = None;
                }
            }
        }

        true
    }

    fn finish_lesson(&mut self, text: String, request_id: u64) {
        let pending = match self.pending.take() {
            Some(p) if p.request_id == request_id => p,
            other => {
                self.pending = other;
                return;
            }
        };

        let text = match pending.kind {
            LessonKind::Code => prompt::strip_code_fences(&text),
            _ => text,
        };

        self.lesson.complete(text);
        self.lesson_scroll.reset();
        self.history_log
            .record(pending.kind.history_tag(), pending.payload);
        self.notification
            .success(&format!("{} ready: {}", pending.kind.label(), pending.topic));
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
