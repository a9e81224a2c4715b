//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the counter.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the view counter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Deployment environment name, reported at startup.
    pub environment: String,

    /// Listener configuration (host, port, proxy trust).
    pub server: ServerConfig,

    /// Default badge appearance.
    pub badge: BadgeConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Response hardening and request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            badge: BadgeConfig::default(),
            timeouts: TimeoutConfig::default(),
            security: SecurityConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Prefer the first `X-Forwarded-For` entry over the peer address when
    /// identifying visitors. Only enable behind a trusted proxy.
    pub trust_forwarded_for: bool,
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            trust_forwarded_for: false,
        }
    }
}

/// Badge defaults used when a request omits a query parameter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Text of the left segment.
    pub label: String,

    /// Hex background of the right segment, without the leading `#`.
    pub color: String,

    /// Badge style name. Accepted for compatibility; the layout is fixed.
    pub style: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            label: "Profile Views".to_string(),
            color: "00D4FF".to_string(),
            style: "for-the-badge".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            cors_enabled: true,
            max_body_size: 100 * 1024, // 100KB
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
