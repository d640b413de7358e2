//! Per-actor repeat tracking for spam suppression.
//!
//! The tracker remembers the last affected resource per actor. A repeat of
//! the same resource inside the window classifies `Repeating` without
//! refreshing the stored timestamp, so the suppression window stays anchored
//! to the first event of a burst. Entries never expire on their own; hosts
//! call the forget operations on disconnect or reset.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use interdict_core::event::ResourceId;

/// Repeats inside this window suppress notify/log/tell effects.
pub const REPEAT_WINDOW_MS: u64 = 3000;

/// Result of classifying one event against the actor's tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// First sighting, different resource, or window elapsed.
    Fresh,
    /// Same actor and resource, inside the window.
    Repeating,
}

#[derive(Debug, Clone, Copy)]
struct TrackedEvent {
    resource: ResourceId,
    at_ms: u64,
}

/// Actor id -> last tracked event.
#[derive(Default)]
pub struct ActorTracker {
    entries: DashMap<String, TrackedEvent>,
}

impl ActorTracker {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Classify an event and update the tracked entry.
    ///
    /// The entry lock is held for the whole read-compare-write, so two
    /// near-simultaneous events for one actor cannot both classify `Fresh`.
    pub fn classify(&self, actor_id: &str, resource: ResourceId, now_ms: u64) -> Freshness {
        match self.entries.entry(actor_id.to_string()) {
            Entry::Occupied(mut occupied) => {
                let tracked = *occupied.get();
                if tracked.resource == resource
                    && now_ms.saturating_sub(tracked.at_ms) < REPEAT_WINDOW_MS
                {
                    // Repeat: entry stays untouched, anchoring the window to
                    // the original event rather than sliding it.
                    Freshness::Repeating
                } else {
                    occupied.insert(TrackedEvent {
                        resource,
                        at_ms: now_ms,
                    });
                    Freshness::Fresh
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(TrackedEvent {
                    resource,
                    at_ms: now_ms,
                });
                Freshness::Fresh
            }
        }
    }

    /// Drop an actor's tracked state. No-op if absent.
    pub fn forget(&self, actor_id: &str) {
        self.entries.remove(actor_id);
    }

    /// Drop all tracked state.
    pub fn forget_all(&self) {
        self.entries.clear();
    }

    /// Whether the actor currently has tracked state.
    pub fn is_tracked(&self, actor_id: &str) -> bool {
        self.entries.contains_key(actor_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
