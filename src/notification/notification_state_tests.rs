use super::*;
use std::thread;

fn fast_state() -> NotificationState {
    // Short timings so lifecycle tests run in milliseconds
    NotificationState::with_timings(Duration::from_millis(20), Duration::from_millis(10))
}

// ==================== Unit Tests ====================

#[test]
fn test_push_appends() {
    let mut state = NotificationState::new();
    assert!(state.is_empty());

    state.success("First");
    state.error("Second");

    assert_eq!(state.len(), 2);
    assert_eq!(state.messages(), vec!["First", "Second"]);
}

#[test]
fn test_default_severity_is_success() {
    assert_eq!(Severity::default(), Severity::Success);
}

#[test]
fn test_repeated_identical_pushes_stack() {
    let mut state = NotificationState::new();
    state.success("Copied!");
    state.success("Copied!");
    state.success("Copied!");

    // No de-duplication
    assert_eq!(state.len(), 3);
}

#[test]
fn test_toast_expires_then_leaves_then_removed() {
    let mut state = fast_state();
    state.success("Transient");

    assert!(!state.tick());
    assert!(!state.toasts()[0].is_leaving());

    // Past the show duration: enters the leaving phase
    thread::sleep(Duration::from_millis(25));
    assert!(state.tick());
    assert_eq!(state.len(), 1);
    assert!(state.toasts()[0].is_leaving());

    // Past the exit duration: removed
    thread::sleep(Duration::from_millis(15));
    assert!(state.tick());
    assert!(state.is_empty());
}

#[test]
fn test_removed_within_show_plus_exit_window() {
    let mut state = fast_state();
    state.success("Bounded");

    // A little past show + exit, with ticks in between
    for _ in 0..5 {
        thread::sleep(Duration::from_millis(10));
        state.tick();
    }

    assert!(state.is_empty());
}

#[test]
fn test_manual_dismiss_preempts_timer() {
    let mut state = fast_state();
    let id = state.success("Going early");

    assert!(state.dismiss(id));
    assert!(state.toasts()[0].is_leaving());

    // The later timer expiry must not double-trigger the leaving phase
    thread::sleep(Duration::from_millis(25));
    assert!(!state.dismiss(id));

    state.tick();
    assert!(state.is_empty());

    // Ticking again after removal is harmless
    assert!(!state.tick());
}

#[test]
fn test_dismiss_unknown_id_is_noop() {
    let mut state = fast_state();
    state.success("Here");
    assert!(!state.dismiss(999));
    assert_eq!(state.len(), 1);
}

#[test]
fn test_dismiss_newest_skips_leaving_toasts() {
    let mut state = fast_state();
    state.success("old");
    let newest = state.success("new");

    assert!(state.dismiss(newest));
    // Newest is already leaving, so the next dismissal targets the older one
    assert!(state.dismiss_newest());
    assert!(state.toasts().iter().all(Toast::is_leaving));
}

#[test]
fn test_independent_timers() {
    let mut state = fast_state();
    state.success("short");
    state.push_for("long", Severity::Success, Duration::from_millis(200));

    thread::sleep(Duration::from_millis(35));
    state.tick();
    thread::sleep(Duration::from_millis(15));
    state.tick();

    // Only the short-lived toast is gone
    assert_eq!(state.messages(), vec!["long"]);
    assert!(!state.toasts()[0].is_leaving());
}

#[test]
fn test_dismiss_at_hits_recorded_area() {
    let mut state = NotificationState::new();
    let id = state.success("Clickable");
    state.set_areas(vec![(
        id,
        Rect {
            x: 60,
            y: 2,
            width: 16,
            height: 3,
        },
    )]);

    assert!(!state.dismiss_at(5, 5));
    assert!(state.dismiss_at(62, 3));
    assert!(state.toasts()[0].is_leaving());
}

// ==================== Property-Based Tests ====================

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For any sequence of pushes, all messages stack in arrival order.
    #[test]
    fn prop_pushes_stack_in_order(messages in prop::collection::vec("[a-zA-Z0-9 ]{1,40}", 1..10)) {
        let mut state = NotificationState::new();

        for msg in &messages {
            state.push(msg, Severity::Success);
        }

        prop_assert_eq!(state.len(), messages.len());
        let stored: Vec<String> = state.messages().iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(stored, messages);
    }

    // Dismissing every toast exactly once always succeeds; a second pass never does.
    #[test]
    fn prop_dismiss_is_at_most_once(count in 1usize..8) {
        let mut state = NotificationState::new();
        let ids: Vec<u64> = (0..count).map(|i| state.success(&format!("t{}", i))).collect();

        for id in &ids {
            prop_assert!(state.dismiss(*id));
        }
        for id in &ids {
            prop_assert!(!state.dismiss(*id));
        }
    }
}
