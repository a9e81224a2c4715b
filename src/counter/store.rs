//! Storage seam for view counters.
//!
//! Handlers never touch `ViewState` directly; they go through a `ViewStore`
//! so a persistent backend can replace the in-memory one without changing
//! the HTTP layer.

use chrono::Utc;
use parking_lot::RwLock;

use crate::counter::state::{RecordedView, ViewSnapshot, ViewState};

/// Backing storage for the view counters.
pub trait ViewStore: Send + Sync {
    /// Current counters. Must not modify state.
    fn snapshot(&self) -> ViewSnapshot;

    /// Atomically increment the count, stamp the time and remember `visitor`.
    fn record(&self, visitor: &str) -> RecordedView;
}

/// Process-memory store. Counters reset when the process exits.
#[derive(Debug)]
pub struct InMemoryViewStore {
    state: RwLock<ViewState>,
}

impl InMemoryViewStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(ViewState::new(Utc::now())),
        }
    }
}

impl Default for InMemoryViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore for InMemoryViewStore {
    fn snapshot(&self) -> ViewSnapshot {
        self.state.read().snapshot()
    }

    fn record(&self, visitor: &str) -> RecordedView {
        let mut state = self.state.write();
        state.record(visitor, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_counts_increase_by_one() {
        let store = InMemoryViewStore::new();
        for expected in 1..=10 {
            assert_eq!(store.record("127.0.0.1").count, expected);
        }
        assert_eq!(store.snapshot().count, 10);
    }

    #[test]
    fn test_unique_visitors_independent_of_order() {
        let store = InMemoryViewStore::new();
        let visitors = ["a", "b", "a", "c", "b", "a", "d"];
        for v in visitors {
            store.record(v);
        }
        let snapshot = store.snapshot();
        assert_eq!(snapshot.count, visitors.len() as u64);
        assert_eq!(snapshot.unique_visitors, 4);
    }

    #[test]
    fn test_snapshot_has_no_side_effects() {
        let store = InMemoryViewStore::new();
        store.record("a");
        let first = store.snapshot();
        let second = store.snapshot();
        assert_eq!(first, second);
        assert_eq!(second.count, 1);
    }

    #[test]
    fn test_concurrent_records_are_not_lost() {
        let store = Arc::new(InMemoryViewStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.record(&format!("visitor-{t}"));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        let snapshot = store.snapshot();
        assert_eq!(snapshot.count, 2000);
        assert_eq!(snapshot.unique_visitors, 8);
    }
}
