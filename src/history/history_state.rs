use ratatui::style::Style;
use tui_textarea::TextArea;

use super::entry::HistoryEntry;
use super::matcher::HistoryMatcher;
use crate::theme;

/// Maximum number of history items to display in the popup.
pub const MAX_VISIBLE_HISTORY: usize = 12;

/// One row of the popup, prepared from a [`HistoryEntry`] at open time.
#[derive(Debug, Clone)]
pub struct HistoryItem {
    /// Search/display label: "[kind] topic"
    pub label: String,
    /// Topic used to refill the input on selection
    pub topic: String,
    /// Local-format timestamp column
    pub time: String,
}

impl HistoryItem {
    fn from_entry(entry: &HistoryEntry) -> Option<Self> {
        let topic = entry.topic()?.to_string();
        Some(Self {
            label: format!("[{}] {}", entry.kind, topic),
            time: entry.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            topic,
        })
    }
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::history::SEARCH_CURSOR);
    textarea
}

/// Manages the state of the history popup.
///
/// The popup snapshots the log when opened; recordings that land while it is
/// open show up the next time it opens.
pub struct HistoryState {
    items: Vec<HistoryItem>,
    filtered_indices: Vec<usize>,
    search_textarea: TextArea<'static>,
    selected_index: usize,
    visible: bool,
    matcher: HistoryMatcher,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            filtered_indices: Vec::new(),
            search_textarea: create_search_textarea(),
            selected_index: 0,
            visible: false,
            matcher: HistoryMatcher::new(),
        }
    }

    /// Open the popup over the given entries (newest first).
    pub fn open(&mut self, entries: &[HistoryEntry]) {
        self.items = entries.iter().filter_map(HistoryItem::from_entry).collect();
        self.visible = true;
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.update_filter();
        self.selected_index = 0;
    }

    /// Close the popup and reset search state.
    pub fn close(&mut self) {
        self.visible = false;
        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.selected_index = 0;
        self.filtered_indices.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// Called after TextArea input to update the filter.
    pub fn on_search_input_changed(&mut self) {
        self.update_filter();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.filtered_indices.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.filtered_indices.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Topic of the currently selected item, if any.
    pub fn selected_topic(&self) -> Option<&str> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|&idx| self.items.get(idx))
            .map(|item| item.topic.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Visible (filtered) items with display indices, newest at the bottom.
    pub fn visible_items(&self) -> Vec<(usize, &HistoryItem)> {
        let mut rows: Vec<(usize, &HistoryItem)> = self
            .filtered_indices
            .iter()
            .take(MAX_VISIBLE_HISTORY)
            .enumerate()
            .filter_map(|(display_idx, &item_idx)| {
                self.items.get(item_idx).map(|item| (display_idx, item))
            })
            .collect();

        rows.reverse();
        rows
    }

    fn update_filter(&mut self) {
        let query = self
            .search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
            .to_string();
        let labels: Vec<String> = self.items.iter().map(|i| i.label.clone()).collect();
        self.filtered_indices = self.matcher.filter(&query, &labels);
    }
}

#[cfg(test)]
#[path = "history_state_tests.rs"]
mod history_state_tests;
