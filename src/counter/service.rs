//! Counter service: the operations exposed over HTTP.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::badge::{render_badge, BadgeOptions};
use crate::counter::state::{serialize_timestamp, RecordedView, ViewSnapshot};
use crate::counter::store::{InMemoryViewStore, ViewStore};
use crate::observability::metrics;

pub const SERVICE_BANNER: &str = "Profile View Counter API";

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub message: &'static str,
    pub status: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub view_count: u64,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started.
    pub uptime: f64,
    pub view_count: u64,
}

/// Owns the view store and the service start time.
pub struct CounterService {
    store: Arc<dyn ViewStore>,
    started_at: Instant,
}

impl CounterService {
    pub fn new(store: Arc<dyn ViewStore>) -> Self {
        Self {
            store,
            started_at: Instant::now(),
        }
    }

    /// Service backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryViewStore::new()))
    }

    pub fn status(&self) -> StatusReport {
        StatusReport {
            message: SERVICE_BANNER,
            status: "running",
            timestamp: Utc::now(),
            view_count: self.store.snapshot().count,
        }
    }

    pub fn views(&self) -> ViewSnapshot {
        self.store.snapshot()
    }

    /// Count one view from `visitor`.
    pub fn record_view(&self, visitor: &str, user_agent: &str) -> RecordedView {
        let view = self.store.record(visitor);

        tracing::info!(
            visitor = %view.visitor,
            total = view.count,
            unique = view.unique_visitors,
            "New view"
        );
        tracing::debug!(visitor = %view.visitor, user_agent = %user_agent, "View user agent");
        metrics::record_view(view.unique_visitors);

        view
    }

    /// SVG badge for the current count.
    pub fn badge(&self, options: &BadgeOptions) -> String {
        metrics::record_badge_render();
        render_badge(options, self.store.snapshot().count)
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            timestamp: Utc::now(),
            uptime: self.started_at.elapsed().as_secs_f64(),
            view_count: self.store.snapshot().count,
        }
    }
}

impl Default for CounterService {
    fn default() -> Self {
        Self::in_memory()
    }
}
