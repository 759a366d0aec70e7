use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::state::{App, Focus};
use crate::history::render_history_popup;
use crate::notification::render_notifications;
use crate::theme;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Split the terminal into three areas: lesson, input, and help
        let layout = Layout::vertical([
            Constraint::Min(3),    // Lesson pane takes most of the space
            Constraint::Length(3), // Topic input is fixed 3 lines
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        let lesson_area = layout[0];
        let input_area = layout[1];
        let help_area = layout[2];

        self.render_lesson_pane(frame, lesson_area);
        self.render_topic_input(frame, input_area);
        self.render_help_line(frame, help_area);

        // Popups render last so they overlay the panes
        if self.history.is_visible() {
            render_history_popup(frame, &mut self.history, input_area);
        }

        render_notifications(frame, &mut self.notification);
    }

    /// Render the lesson pane (top)
    fn render_lesson_pane(&mut self, frame: &mut Frame, area: Rect) {
        // Remember the area for mouse scroll routing
        self.lesson_area = area;

        let border_color = match self.focus {
            Focus::LessonPane => theme::lesson::BORDER_FOCUSED,
            Focus::TopicInput => theme::lesson::BORDER_UNFOCUSED,
        };

        let title = self.lesson_title();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color));

        let viewport_height = area.height.saturating_sub(2);
        self.lesson_scroll
            .update_bounds(self.lesson.line_count(), viewport_height);

        let paragraph = match self.lesson.text() {
            Some(text) => Paragraph::new(text.to_string())
                .style(Style::default().fg(theme::lesson::TEXT))
                .wrap(Wrap { trim: false })
                .scroll((self.lesson_scroll.offset, 0)),
            None => Paragraph::new("Type a machine learning topic below and press Enter.")
                .style(Style::default().fg(theme::lesson::PLACEHOLDER)),
        };

        frame.render_widget(paragraph.block(block), area);
    }

    /// Pane title: kind badge, level, and topic or progress
    fn lesson_title(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.kind.label()),
            Style::default()
                .fg(theme::lesson::KIND_BADGE)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(level) = self.level_label() {
            spans.push(Span::styled(
                format!("({}) ", level),
                Style::default().fg(theme::palette::TEXT_MUTED),
            ));
        }

        if let Some(topic) = self.lesson.generating_topic() {
            spans.push(Span::styled(
                format!("· generating: {}… ", topic),
                Style::default().fg(theme::lesson::GENERATING),
            ));
        } else if let Some(topic) = self.lesson.topic() {
            spans.push(Span::styled(
                format!("· {} ", topic),
                Style::default().fg(theme::palette::TEXT),
            ));
        }

        Line::from(spans)
    }

    /// Render the topic input (middle)
    fn render_topic_input(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = match self.focus {
            Focus::TopicInput => theme::input::BORDER_FOCUSED,
            Focus::LessonPane => theme::input::BORDER_UNFOCUSED,
        };

        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Topic ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input.textarea, area);
    }

    /// Render the help line (bottom)
    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let bindings = [
            ("Enter", "generate"),
            ("^L", "kind"),
            ("^D", "level"),
            ("^R", "history"),
            ("^Y", "copy"),
            ("Tab", "focus"),
            ("Esc", "dismiss/quit"),
        ];

        let mut spans = Vec::with_capacity(bindings.len() * 2);
        for (key, label) in bindings {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(theme::help::KEY),
            ));
            spans.push(Span::styled(
                format!("{} ", label),
                Style::default().fg(theme::help::LABEL),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
