use super::*;
use serde_json::json;

fn entries(topics: &[&str]) -> Vec<HistoryEntry> {
    topics
        .iter()
        .map(|t| HistoryEntry::new("text", json!({"topic": t})))
        .collect()
}

fn type_search(state: &mut HistoryState, text: &str) {
    state.search_textarea_mut().insert_str(text);
    state.on_search_input_changed();
}

#[test]
fn test_open_snapshots_entries() {
    let mut state = HistoryState::new();
    assert!(!state.is_visible());

    state.open(&entries(&["gradient descent", "k-means"]));
    assert!(state.is_visible());
    assert_eq!(state.total_count(), 2);
    assert_eq!(state.filtered_count(), 2);
}

#[test]
fn test_open_skips_entries_without_topic() {
    let mut state = HistoryState::new();
    let mut all = entries(&["svm"]);
    all.push(HistoryEntry::new("text", json!({"other": true})));

    state.open(&all);
    assert_eq!(state.total_count(), 1);
}

#[test]
fn test_selection_wraps() {
    let mut state = HistoryState::new();
    state.open(&entries(&["a", "b", "c"]));

    assert_eq!(state.selected_topic(), Some("a"));
    state.select_previous();
    assert_eq!(state.selected_topic(), Some("c"));
    state.select_next();
    assert_eq!(state.selected_topic(), Some("a"));
}

#[test]
fn test_search_filters_and_resets_selection() {
    let mut state = HistoryState::new();
    state.open(&entries(&["gradient descent", "decision trees", "gradient boosting"]));
    state.select_next();

    type_search(&mut state, "gradient");
    assert_eq!(state.filtered_count(), 2);
    assert_eq!(state.selected_index(), 0);

    let topics: Vec<&str> = state
        .visible_items()
        .iter()
        .map(|(_, item)| item.topic.as_str())
        .collect();
    assert!(topics.iter().all(|t| t.contains("gradient")));
}

#[test]
fn test_search_matches_kind_tag() {
    let mut state = HistoryState::new();
    let mut all = entries(&["svm"]);
    all.push(HistoryEntry::new("code", json!({"topic": "pca"})));

    state.open(&all);
    type_search(&mut state, "[code]");
    assert_eq!(state.filtered_count(), 1);
    assert_eq!(state.selected_topic(), Some("pca"));
}

#[test]
fn test_close_resets_state() {
    let mut state = HistoryState::new();
    state.open(&entries(&["a"]));
    type_search(&mut state, "a");

    state.close();
    assert!(!state.is_visible());
    assert_eq!(state.filtered_count(), 0);

    // Re-opening starts from a clean search
    state.open(&entries(&["a", "b"]));
    assert_eq!(state.filtered_count(), 2);
}

#[test]
fn test_visible_items_newest_at_bottom() {
    let mut state = HistoryState::new();
    state.open(&entries(&["newest", "older", "oldest"]));

    let rows = state.visible_items();
    assert_eq!(rows.last().unwrap().1.topic, "newest");
    assert_eq!(rows.first().unwrap().1.topic, "oldest");
}

#[test]
fn test_visible_items_capped() {
    let mut state = HistoryState::new();
    let topics: Vec<String> = (0..30).map(|i| format!("topic-{}", i)).collect();
    let topic_refs: Vec<&str> = topics.iter().map(String::as_str).collect();
    state.open(&entries(&topic_refs));

    assert_eq!(state.visible_items().len(), MAX_VISIBLE_HISTORY);
}
