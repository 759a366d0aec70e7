//! Mouse event routing
//!
//! Wheel scrolls the lesson pane; left click dismisses the toast under the
//! cursor.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::state::App;

const WHEEL_LINES: u16 = 3;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown if in_area(app.lesson_area, mouse.column, mouse.row) => {
            app.lesson_scroll.scroll_down(WHEEL_LINES);
            app.mark_dirty();
        }
        MouseEventKind::ScrollUp if in_area(app.lesson_area, mouse.column, mouse.row) => {
            app.lesson_scroll.scroll_up(WHEEL_LINES);
            app.mark_dirty();
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.notification.dismiss_at(mouse.column, mouse.row) {
                app.mark_dirty();
            }
        }
        _ => {}
    }
}

fn in_area(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use ratatui::crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_wheel_scrolls_lesson_pane() {
        let mut app = test_app();
        app.lesson_area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 20,
        };
        app.lesson_scroll.update_bounds(100, 18);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 5));
        assert_eq!(app.lesson_scroll.offset, WHEEL_LINES);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 10, 5));
        assert_eq!(app.lesson_scroll.offset, 0);
    }

    #[test]
    fn test_wheel_outside_pane_ignored() {
        let mut app = test_app();
        app.lesson_area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 20,
        };
        app.lesson_scroll.update_bounds(100, 18);

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 10, 25));
        assert_eq!(app.lesson_scroll.offset, 0);
    }

    #[test]
    fn test_click_dismisses_toast() {
        let mut app = test_app();
        app.notification.success("click me");

        // Render once to record the toast's screen area
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), 75, 3),
        );
        assert!(app.notification.toasts()[0].is_leaving());
    }
}
