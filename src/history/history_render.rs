use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use super::history_state::HistoryState;
use super::MAX_VISIBLE_HISTORY;
use crate::theme;
use crate::widgets::popup;

pub const HISTORY_SEARCH_HEIGHT: u16 = 3;

/// Render the history popup above the topic input (full width).
pub fn render_history_popup(frame: &mut Frame, history: &mut HistoryState, input_area: Rect) {
    let visible_count = history.filtered_count().min(MAX_VISIBLE_HISTORY);
    let list_height = (visible_count as u16).max(1) + 2; // +2 for borders, min 1 row
    let total_height = list_height + HISTORY_SEARCH_HEIGHT;

    let popup_y = input_area.y.saturating_sub(total_height);
    let popup_area = Rect {
        x: input_area.x,
        y: popup_y,
        width: input_area.width,
        height: total_height.min(input_area.y),
    };

    if popup_area.height < HISTORY_SEARCH_HEIGHT + 3 {
        return;
    }

    popup::clear_area(frame, popup_area);

    let layout = Layout::vertical([
        Constraint::Min(3),                        // History list
        Constraint::Length(HISTORY_SEARCH_HEIGHT), // Search box
    ])
    .split(popup_area);

    let list_area = layout[0];
    let search_area = layout[1];

    let title = format!(
        " History ({}/{}) ",
        history.filtered_count(),
        history.total_count()
    );

    let time_column = 18; // "YYYY-MM-DD HH:MM" + padding
    let max_label_len = (list_area.width as usize).saturating_sub(6 + time_column);

    let items: Vec<ListItem> = if history.filtered_count() == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "   No matches",
            Style::default().fg(theme::palette::TEXT_DIM),
        )))]
    } else {
        history
            .visible_items()
            .into_iter()
            .map(|(display_idx, item)| {
                let label = if item.label.chars().count() > max_label_len {
                    let truncated: String = item.label.chars().take(max_label_len).collect();
                    format!("{}…", truncated)
                } else {
                    item.label.clone()
                };

                let selected = display_idx == history.selected_index();
                let marker = if selected { " ► " } else { "   " };
                let row_style = if selected {
                    Style::default()
                        .fg(theme::history::ENTRY)
                        .bg(theme::history::SELECTED_BG)
                } else {
                    Style::default().fg(theme::history::ENTRY)
                };

                let pad = max_label_len.saturating_sub(label.chars().count()) + 2;
                let line = Line::from(vec![
                    Span::styled(format!("{}{}", marker, label), row_style),
                    Span::styled(" ".repeat(pad), row_style),
                    Span::styled(
                        item.time.clone(),
                        row_style.fg(theme::history::ENTRY_TIME),
                    ),
                ]);

                ListItem::new(line)
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(theme::history::BORDER))
        .style(Style::default().bg(theme::palette::BG_SURFACE));

    frame.render_widget(List::new(items).block(block), list_area);

    let search_textarea = history.search_textarea_mut();
    search_textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Search ")
            .border_style(Style::default().fg(theme::history::BORDER))
            .style(Style::default().bg(theme::palette::BG_SURFACE)),
    );
    frame.render_widget(&*search_textarea, search_area);
}
