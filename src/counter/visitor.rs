//! Visitor identification.
//!
//! # Precedence
//! 1. First `X-Forwarded-For` entry, only when forwarded headers are trusted
//! 2. Peer IP address of the connection (port dropped, v4-mapped v6 unwrapped)
//! 3. First `X-Forwarded-For` entry, when no peer address is known
//! 4. `"unknown"`

use std::net::SocketAddr;

use axum::http::{header, HeaderMap};

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const UNKNOWN: &str = "unknown";

/// Derive the identifier used for unique-visitor membership.
pub fn resolve_visitor(peer: Option<SocketAddr>, headers: &HeaderMap, trust_forwarded_for: bool) -> String {
    let forwarded = forwarded_for(headers);

    if trust_forwarded_for {
        if let Some(ip) = forwarded {
            return ip.to_owned();
        }
    }

    if let Some(addr) = peer {
        return addr.ip().to_canonical().to_string();
    }

    forwarded.unwrap_or(UNKNOWN).to_owned()
}

/// The `User-Agent` header, or `"unknown"`.
pub fn user_agent(headers: &HeaderMap) -> &str {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
}

fn forwarded_for(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn forwarded(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(X_FORWARDED_FOR, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_peer_address_wins_by_default() {
        let peer: SocketAddr = "192.168.1.7:51234".parse().unwrap();
        let headers = forwarded("203.0.113.9");
        assert_eq!(resolve_visitor(Some(peer), &headers, false), "192.168.1.7");
    }

    #[test]
    fn test_trusted_forwarded_for_wins() {
        let peer: SocketAddr = "10.0.0.1:80".parse().unwrap();
        let headers = forwarded("203.0.113.9, 10.0.0.1");
        assert_eq!(resolve_visitor(Some(peer), &headers, true), "203.0.113.9");
    }

    #[test]
    fn test_trusted_without_header_falls_back_to_peer() {
        let peer: SocketAddr = "10.0.0.1:80".parse().unwrap();
        assert_eq!(resolve_visitor(Some(peer), &HeaderMap::new(), true), "10.0.0.1");
    }

    #[test]
    fn test_forwarded_for_used_without_peer() {
        let headers = forwarded(" 198.51.100.4 ");
        assert_eq!(resolve_visitor(None, &headers, false), "198.51.100.4");
    }

    #[test]
    fn test_unknown_when_nothing_available() {
        assert_eq!(resolve_visitor(None, &HeaderMap::new(), false), "unknown");
        assert_eq!(resolve_visitor(None, &forwarded(""), true), "unknown");
    }

    #[test]
    fn test_v4_mapped_address_is_unwrapped() {
        let peer: SocketAddr = "[::ffff:127.0.0.1]:4000".parse().unwrap();
        assert_eq!(resolve_visitor(Some(peer), &HeaderMap::new(), false), "127.0.0.1");
    }

    #[test]
    fn test_user_agent_default() {
        assert_eq!(user_agent(&HeaderMap::new()), "unknown");

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl/8.0"));
        assert_eq!(user_agent(&headers), "curl/8.0");
    }
}
