use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use crate::app::App;

/// Handle keys while the history popup is visible.
pub fn handle_history_popup_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Navigation (reversed because display is reversed - newest at bottom)
        KeyCode::Up => {
            app.history.select_next();
        }
        KeyCode::Down => {
            app.history.select_previous();
        }

        // Select and close
        KeyCode::Enter | KeyCode::Tab => {
            if let Some(topic) = app.history.selected_topic() {
                let topic = topic.to_string();
                app.input.set_topic(&topic);
            }
            app.history.close();
        }

        // Cancel
        KeyCode::Esc => {
            app.history.close();
        }

        // Let TextArea handle all other input (chars, backspace, arrows, etc.)
        _ => {
            let input = Input::from(key);
            if app.history.search_textarea_mut().input(input) {
                app.history.on_search_input_changed();
            }
        }
    }
}
