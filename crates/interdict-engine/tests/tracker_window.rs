//! Debounce window classification and forget semantics.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use interdict_engine::tracker::{ActorTracker, Freshness, REPEAT_WINDOW_MS};

#[test]
fn first_event_is_fresh() {
    let tracker = ActorTracker::new();
    assert_eq!(tracker.classify("bob", 5, 0), Freshness::Fresh);
    assert!(tracker.is_tracked("bob"));
}

#[test]
fn window_edge_is_exclusive() {
    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    assert_eq!(tracker.classify("bob", 5, 2999), Freshness::Repeating);

    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    assert_eq!(
        tracker.classify("bob", 5, REPEAT_WINDOW_MS),
        Freshness::Fresh
    );
}

#[test]
fn different_resource_resets_inside_window() {
    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    assert_eq!(tracker.classify("bob", 6, 100), Freshness::Fresh);
    // the new resource now owns the window
    assert_eq!(tracker.classify("bob", 6, 200), Freshness::Repeating);
}

#[test]
fn window_is_anchored_to_first_event_of_burst() {
    let tracker = ActorTracker::new();
    assert_eq!(tracker.classify("bob", 5, 0), Freshness::Fresh);
    assert_eq!(tracker.classify("bob", 5, 1500), Freshness::Repeating);
    assert_eq!(tracker.classify("bob", 5, 2900), Freshness::Repeating);
    // repeats never refreshed the timestamp, so the burst ends 3000ms after
    // the first event even though the last repeat was 200ms ago
    assert_eq!(tracker.classify("bob", 5, 3100), Freshness::Fresh);
}

#[test]
fn actors_are_independent() {
    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    assert_eq!(tracker.classify("alice", 5, 100), Freshness::Fresh);
}

#[test]
fn forget_resets_classification() {
    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    tracker.forget("bob");
    assert!(!tracker.is_tracked("bob"));
    assert_eq!(tracker.classify("bob", 5, 100), Freshness::Fresh);
}

#[test]
fn forget_is_idempotent() {
    let tracker = ActorTracker::new();
    tracker.forget("ghost");
    tracker.forget("ghost");
    assert!(tracker.is_empty());
}

#[test]
fn forget_all_clears_everything() {
    let tracker = ActorTracker::new();
    tracker.classify("bob", 5, 0);
    tracker.classify("alice", 9, 0);
    assert_eq!(tracker.len(), 2);
    tracker.forget_all();
    assert!(tracker.is_empty());
    assert_eq!(tracker.classify("bob", 5, 100), Freshness::Fresh);
}
