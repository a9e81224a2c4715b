//! Security response headers and CORS.
//!
//! # Responsibilities
//! - Add hardening headers to every response (optional)
//! - Allow cross-origin reads so badges and counters work from any page
//!
//! # Design Decisions
//! - Headers are only set when the handler did not already set them
//! - No `Cross-Origin-Resource-Policy`: badges must embed cross-site

use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer};

use crate::config::SecurityConfig;

/// Hardening headers applied when `security.enable_headers` is set.
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("referrer-policy", "no-referrer"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-permitted-cross-domain-policies", "none"),
];

/// Layer security headers and CORS onto `router` according to `config`.
pub fn apply_security_headers(mut router: Router, config: &SecurityConfig) -> Router {
    if config.enable_headers {
        for (name, value) in SECURITY_HEADERS {
            router = router.layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            ));
        }
    }

    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router
}
