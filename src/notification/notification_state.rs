//! Toast state management
//!
//! Toasts stack; each one runs its own show timer, plays a short leaving
//! phase, then disappears. Dismissal (click or Esc) starts the leaving phase
//! early and wins the race against the timer.

use ratatui::layout::Rect;
use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Default time a toast stays fully visible.
pub const DEFAULT_SHOW_MS: u64 = 4000;
/// Default length of the dimmed leaving phase.
pub const DEFAULT_EXIT_MS: u64 = 300;

/// Toast severity - determines style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Confirmations like "Copied!" or "Lesson ready"
    #[default]
    Success,
    /// Failed API calls, clipboard failures
    Error,
    /// Invalid config, missing topic
    Warning,
}

impl Severity {
    pub(super) fn style(self) -> ToastStyle {
        match self {
            Severity::Success => ToastStyle {
                fg: theme::notification::SUCCESS_FG,
                bg: theme::notification::SUCCESS_BG,
                border: theme::notification::SUCCESS_BORDER,
            },
            Severity::Error => ToastStyle {
                fg: theme::notification::ERROR_FG,
                bg: theme::notification::ERROR_BG,
                border: theme::notification::ERROR_BORDER,
            },
            Severity::Warning => ToastStyle {
                fg: theme::notification::WARNING_FG,
                bg: theme::notification::WARNING_BG,
                border: theme::notification::WARNING_BORDER,
            },
        }
    }
}

/// Style configuration for a toast
#[derive(Debug, Clone, Copy)]
pub struct ToastStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// Lifecycle phase. A toast leaves the `Leaving` phase only by removal,
/// so the visible -> leaving transition happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Leaving(Instant),
}

/// A single toast with message, timing, and severity
#[derive(Debug, Clone)]
pub struct Toast {
    id: u64,
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
    show_for: Duration,
    phase: Phase,
}

impl Toast {
    fn new(id: u64, message: &str, severity: Severity, show_for: Duration) -> Self {
        Self {
            id,
            message: message.to_string(),
            severity,
            created_at: Instant::now(),
            show_for,
            phase: Phase::Visible,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Leaving(_))
    }

    fn timer_expired(&self) -> bool {
        self.phase == Phase::Visible && self.created_at.elapsed() >= self.show_for
    }

    fn done_leaving(&self, exit_for: Duration) -> bool {
        match self.phase {
            Phase::Leaving(since) => since.elapsed() >= exit_for,
            Phase::Visible => false,
        }
    }

    /// Start the leaving phase. Returns false if it already started, so a
    /// timer firing after a manual dismissal is a harmless no-op.
    fn begin_leaving(&mut self) -> bool {
        match self.phase {
            Phase::Visible => {
                self.phase = Phase::Leaving(Instant::now());
                true
            }
            Phase::Leaving(_) => false,
        }
    }
}

/// Toast stack for the application.
///
/// Toasts append in arrival order; there is no capacity limit and no
/// de-duplication - repeated identical pushes stack repeated toasts.
pub struct NotificationState {
    toasts: Vec<Toast>,
    show_for: Duration,
    exit_for: Duration,
    next_id: u64,
    /// Screen areas from the last render, for click hit-testing
    areas: Vec<(u64, Rect)>,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self::with_timings(
            Duration::from_millis(DEFAULT_SHOW_MS),
            Duration::from_millis(DEFAULT_EXIT_MS),
        )
    }

    pub fn with_timings(show_for: Duration, exit_for: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            show_for,
            exit_for,
            next_id: 0,
            areas: Vec::new(),
        }
    }

    /// Append a toast with the default display duration.
    pub fn push(&mut self, message: &str, severity: Severity) -> u64 {
        self.push_for(message, severity, self.show_for)
    }

    /// Append a toast with an explicit display duration.
    pub fn push_for(&mut self, message: &str, severity: Severity, show_for: Duration) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast::new(id, message, severity, show_for));
        id
    }

    pub fn success(&mut self, message: &str) -> u64 {
        self.push(message, Severity::Success)
    }

    pub fn error(&mut self, message: &str) -> u64 {
        self.push(message, Severity::Error)
    }

    pub fn warning(&mut self, message: &str) -> u64 {
        self.push(message, Severity::Warning)
    }

    /// Manually dismiss a toast, preempting its timer.
    /// Returns true if the toast was visible and is now leaving.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => toast.begin_leaving(),
            None => false,
        }
    }

    /// Dismiss the most recently pushed toast that is still visible.
    pub fn dismiss_newest(&mut self) -> bool {
        for toast in self.toasts.iter_mut().rev() {
            if !toast.is_leaving() {
                return toast.begin_leaving();
            }
        }
        false
    }

    /// Dismiss the toast rendered at the given screen position, if any.
    pub fn dismiss_at(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .areas
            .iter()
            .find(|(_, area)| contains(*area, column, row))
            .map(|(id, _)| *id);

        match hit {
            Some(id) => self.dismiss(id),
            None => false,
        }
    }

    /// Advance toast lifecycles against the clock.
    /// Returns true if any toast changed phase or was removed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        for toast in &mut self.toasts {
            if toast.timer_expired() {
                toast.begin_leaving();
                changed = true;
            }
        }

        let exit_for = self.exit_for;
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.done_leaving(exit_for));
        if self.toasts.len() != before {
            changed = true;

            // Drop stale hit-test areas for removed toasts
            let live: Vec<u64> = self.toasts.iter().map(|t| t.id).collect();
            self.areas.retain(|(id, _)| live.contains(id));
        }

        changed
    }

    /// Toasts in arrival order (oldest first).
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Record where each toast was rendered (called by the renderer).
    pub(super) fn set_areas(&mut self, areas: Vec<(u64, Rect)>) {
        self.areas = areas;
    }

    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.message.as_str()).collect()
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
