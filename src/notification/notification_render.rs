//! Toast rendering
//!
//! Draws the toast stack in the top-right corner of the frame.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::notification_state::{NotificationState, Toast};
use crate::widgets::popup;

const MARGIN: u16 = 2;
const TOAST_HEIGHT: u16 = 3; // 1 line content + 2 borders

/// Render the toast stack, newest on top.
///
/// Call after rendering the main UI so toasts overlay other content. Records
/// each toast's screen area for click hit-testing. Toasts that do not fit in
/// the frame are silently skipped.
pub fn render_notifications(frame: &mut Frame, notification: &mut NotificationState) {
    let frame_area = frame.area();
    let mut areas = Vec::with_capacity(notification.len());

    for (slot, toast) in notification.toasts().iter().rev().enumerate() {
        let toast_area = match toast_area(frame_area, toast, slot as u16) {
            Some(area) => area,
            None => continue,
        };

        // Clear background for floating effect
        popup::clear_area(frame, toast_area);
        render_toast(frame, toast, toast_area);
        areas.push((toast.id(), toast_area));
    }

    notification.set_areas(areas);
}

/// Compute the screen area for the toast in the given stack slot.
/// Returns None when the frame cannot host it.
fn toast_area(frame_area: Rect, toast: &Toast, slot: u16) -> Option<Rect> {
    // Width: message + padding (1 char each side) + borders (2)
    let width = (toast.message.len() as u16 + 4).min(frame_area.width.saturating_sub(MARGIN * 2));
    let x = frame_area.width.saturating_sub(width + MARGIN);
    let y = MARGIN + slot * TOAST_HEIGHT;

    if width < 5 || y + TOAST_HEIGHT > frame_area.height.saturating_sub(1) {
        return None;
    }

    Some(Rect {
        x,
        y,
        width,
        height: TOAST_HEIGHT,
    })
}

fn render_toast(frame: &mut Frame, toast: &Toast, area: Rect) {
    let style = toast.severity.style();

    let mut content_style = Style::default().fg(style.fg).bg(style.bg);
    let mut border_style = Style::default().fg(style.border).bg(style.bg);
    if toast.is_leaving() {
        // Exit transition: the toast fades before removal
        content_style = content_style.add_modifier(Modifier::DIM);
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(format!(" {} ", toast.message), content_style));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
