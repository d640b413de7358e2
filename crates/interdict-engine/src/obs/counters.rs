//! Decision counters.
//!
//! Hand-rolled counters backed by `DashMap`, keyed by event kind and
//! outcome, for hosts that scrape engine state. No external metrics
//! dependency is used.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use interdict_core::action::Verdict;
use interdict_core::event::EventKind;

/// Allow/deny counts per event kind.
#[derive(Default)]
pub struct DecisionCounters {
    map: DashMap<(EventKind, bool), AtomicU64>,
}

impl DecisionCounters {
    /// Count one decision.
    pub fn record(&self, kind: EventKind, verdict: Verdict) {
        let counter = self
            .map
            .entry((kind, verdict.allows()))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Count for one (kind, allowed) cell.
    pub fn get(&self, kind: EventKind, allowed: bool) -> u64 {
        self.map
            .get(&(kind, allowed))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// All non-zero cells, in a stable order.
    pub fn snapshot(&self) -> Vec<(EventKind, bool, u64)> {
        let mut out = Vec::new();
        for kind in EventKind::ALL {
            for allowed in [true, false] {
                let count = self.get(kind, allowed);
                if count > 0 {
                    out.push((kind, allowed, count));
                }
            }
        }
        out
    }
}
