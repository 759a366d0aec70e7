use ratatui::{layout::Rect, widgets::Clear, Frame};

/// Blank out an area so a floating widget renders on a clean background.
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
