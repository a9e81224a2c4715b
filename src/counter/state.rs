//! Process-wide view counters.
//!
//! # Fields
//! - `view_count`: total recorded views, only ever incremented
//! - `last_updated`: time of the most recent increment (or creation)
//! - `unique_visitors`: every visitor identifier seen so far
//!
//! The two counters move together on each recorded view but are otherwise
//! independent: a returning visitor bumps `view_count` without growing the set.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Mutable counter state. Owned by a `ViewStore`; never shared directly.
#[derive(Debug, Clone)]
pub struct ViewState {
    view_count: u64,
    last_updated: DateTime<Utc>,
    unique_visitors: HashSet<String>,
}

/// Read-only copy of the counters at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub count: u64,
    #[serde(serialize_with = "serialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    pub unique_visitors: usize,
}

/// Outcome of recording a single view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedView {
    pub count: u64,
    pub unique_visitors: usize,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "ip")]
    pub visitor: String,
}

/// Render a timestamp as RFC 3339 UTC with millisecond precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(ts))
}

impl ViewState {
    /// Zeroed state stamped with `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            view_count: 0,
            last_updated: now,
            unique_visitors: HashSet::new(),
        }
    }

    /// Count one view from `visitor` at `now`.
    pub fn record(&mut self, visitor: &str, now: DateTime<Utc>) -> RecordedView {
        self.view_count = self.view_count.saturating_add(1);
        self.last_updated = now;
        if !self.unique_visitors.contains(visitor) {
            self.unique_visitors.insert(visitor.to_owned());
        }

        RecordedView {
            count: self.view_count,
            unique_visitors: self.unique_visitors.len(),
            timestamp: now,
            visitor: visitor.to_owned(),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            count: self.view_count,
            last_updated: self.last_updated,
            unique_visitors: self.unique_visitors.len(),
        }
    }
}
