use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::mouse;
use super::state::{App, Focus};
use crate::clipboard;
use crate::history;

/// Timeout for event polling - allows periodic UI refresh for toast expiry
/// and worker responses.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Dispatch a debounced request once its delay has elapsed
        if self.debouncer.is_ready() {
            self.dispatch_request();
            self.debouncer.mark_complete();
            self.mark_dirty();
        }

        // Poll with timeout so toasts expire and responses land without input
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Only key presses, to avoid duplicate handling on release
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Mouse(mouse_event) => {
                    mouse::handle_mouse_event(self, mouse_event);
                }
                // Bracketed paste goes straight into the topic field
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }

        if self.poll_ai() {
            self.mark_dirty();
        }

        if self.notification.tick() {
            self.mark_dirty();
        }

        Ok(())
    }

    fn handle_paste_event(&mut self, text: String) {
        // Keep the topic single-line
        let text = text.replace(['\n', '\r'], " ");
        self.input.textarea.insert_str(&text);
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // History popup captures everything while visible
        if self.history.is_visible() {
            history::events::handle_history_popup_key(self, key);
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        if clipboard::events::handle_clipboard_key(self, key, self.clipboard_backend) {
            return;
        }

        match self.focus {
            Focus::TopicInput => self.handle_topic_input_key(key),
            Focus::LessonPane => self.handle_lesson_pane_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit();
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.cycle_kind();
                true
            }
            KeyCode::Char('d') if ctrl => {
                self.cycle_level();
                true
            }
            KeyCode::Char('r') if ctrl => {
                let entries = self.history_log.entries().to_vec();
                self.history.open(&entries);
                true
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::TopicInput => Focus::LessonPane,
                    Focus::LessonPane => Focus::TopicInput,
                };
                true
            }
            KeyCode::Esc => {
                self.handle_escape();
                true
            }
            _ => false,
        }
    }

    /// Esc priority: cancel generation, dismiss a toast, then quit.
    fn handle_escape(&mut self) {
        if self.ai.is_busy() {
            self.ai.cancel_in_flight();
            self.lesson.abort();
            self.debouncer.cancel();
            return;
        }

        if self.notification.dismiss_newest() {
            return;
        }

        self.quit();
    }

    /// Keys when the topic input is focused
    fn handle_topic_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_topic();
            }
            _ => {
                let input = tui_textarea::Input::from(key);
                self.input.textarea.input(input);
            }
        }
    }

    /// Keys when the lesson pane is focused
    fn handle_lesson_pane_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.lesson_scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.lesson_scroll.scroll_up(1),
            KeyCode::PageDown => self.lesson_scroll.page_down(),
            KeyCode::PageUp => self.lesson_scroll.page_up(),
            KeyCode::Char('g') => self.lesson_scroll.jump_to_top(),
            KeyCode::Char('G') => self.lesson_scroll.jump_to_bottom(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
