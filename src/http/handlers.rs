//! Route handlers for the counter API.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use crate::badge::render::{BadgeOptions, CACHE_CONTROL, CONTENT_TYPE};
use crate::counter::service::{HealthReport, StatusReport};
use crate::counter::visitor::{resolve_visitor, user_agent};
use crate::counter::{RecordedView, ViewSnapshot};
use crate::http::request::ClientAddr;
use crate::http::server::AppState;

/// Optional query parameters of `GET /api/badge`.
///
/// Built from raw pairs so repeated or unknown keys never reject the
/// request; the first occurrence of a key wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BadgeQuery {
    pub label: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
}

impl BadgeQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "label" => &mut query.label,
                "color" => &mut query.color,
                "style" => &mut query.style,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// `GET /`
pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.service.status())
}

/// `GET /api/views`
pub async fn get_views(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.service.views())
}

/// `POST /api/views`
pub async fn record_view(
    State(state): State<AppState>,
    ClientAddr(peer): ClientAddr,
    headers: HeaderMap,
) -> Json<RecordedView> {
    let visitor = resolve_visitor(peer, &headers, state.config.server.trust_forwarded_for);
    Json(state.service.record_view(&visitor, user_agent(&headers)))
}

/// `GET /api/badge`
pub async fn badge(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = BadgeQuery::from_pairs(pairs);
    let options = BadgeOptions::resolve(query.label, query.color, query.style, &state.config.badge);
    let svg = state.service.badge(&options);

    (
        [
            (header::CONTENT_TYPE, CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        svg,
    )
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.service.health())
}
