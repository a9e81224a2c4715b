//! Metrics collection and exposition.
//!
//! # Metrics
//! - `views_recorded_total` (counter): views accepted by `POST /api/views`
//! - `unique_visitors` (gauge): size of the visitor set
//! - `badges_rendered_total` (counter): SVG badges served

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const VIEWS_RECORDED: &str = "views_recorded_total";
pub const UNIQUE_VISITORS: &str = "unique_visitors";
pub const BADGES_RENDERED: &str = "badges_rendered_total";

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_view(unique_visitors: usize) {
    ::metrics::counter!(VIEWS_RECORDED).increment(1);
    ::metrics::gauge!(UNIQUE_VISITORS).set(unique_visitors as f64);
}

pub fn record_badge_render() {
    ::metrics::counter!(BADGES_RENDERED).increment(1);
}
