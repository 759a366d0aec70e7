use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Topic input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Topic ")
                .border_style(Style::default().fg(theme::input::BORDER_UNFOCUSED)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(theme::input::CURSOR);

        Self { textarea }
    }

    /// Current topic text
    pub fn topic(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the topic text, placing the cursor at the end.
    pub fn set_topic(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_is_empty() {
        let input = InputState::new();
        assert_eq!(input.topic(), "");
    }

    #[test]
    fn test_set_topic_replaces_text() {
        let mut input = InputState::new();
        input.set_topic("gradient descent");
        assert_eq!(input.topic(), "gradient descent");

        input.set_topic("k-means");
        assert_eq!(input.topic(), "k-means");
    }
}
