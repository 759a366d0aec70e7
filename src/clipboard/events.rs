use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;
use crate::config::ClipboardBackend;

/// Handle the copy shortcut (Ctrl+Y). Returns true if the key was consumed.
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent, backend: ClipboardBackend) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_lesson(app, backend);
        return true;
    }

    false
}

/// Copy the current lesson text, surfacing the outcome as a toast.
///
/// Clipboard failures never propagate; they turn into an error toast.
pub fn copy_lesson(app: &mut App, backend: ClipboardBackend) {
    let text = match app.lesson.text() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => {
            app.notification.warning("Nothing to copy yet");
            return;
        }
    };

    match copy_to_clipboard(&text, backend) {
        Ok(()) => {
            app.notification.success("Copied to clipboard!");
        }
        Err(_) => {
            app.notification.error("Could not copy to clipboard");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::notification::Severity;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_unrelated_key_not_consumed() {
        let mut app = test_app();
        let key = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::empty());
        assert!(!handle_clipboard_key(&mut app, key, ClipboardBackend::Osc52));
    }

    #[test]
    fn test_copy_without_lesson_warns() {
        let mut app = test_app();
        assert!(handle_clipboard_key(&mut app, ctrl('y'), ClipboardBackend::Osc52));

        let toasts = app.notification.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Warning);
    }

    #[test]
    fn test_copy_lesson_shows_success_toast() {
        let mut app = test_app();
        app.lesson.complete("Gradient descent is...".to_string());

        copy_lesson(&mut app, ClipboardBackend::Osc52);

        let toasts = app.notification.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(toasts[0].message, "Copied to clipboard!");
    }
}
