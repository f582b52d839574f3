//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Environment name that switches off development behavior.
pub const PRODUCTION: &str = "production";

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Deployment environment (`ENV`). Anything but "production" is dev mode.
    pub environment: String,

    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Rate limiting configuration.
    pub rate_limit: RateLimitConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// CSS build and static asset locations.
    pub assets: AssetConfig,

    /// Template directories.
    pub templates: TemplateConfig,

    /// Mock data fixtures.
    pub fixtures: FixtureConfig,

    /// Feedback collection.
    pub feedback: FeedbackConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl SiteConfig {
    /// True unless the environment is exactly "production".
    pub fn is_dev(&self) -> bool {
        self.environment != PRODUCTION
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind.
    pub host: String,

    /// TCP port (`PORT`).
    pub port: u16,
}

impl ListenerConfig {
    /// Socket address string, e.g. "0.0.0.0:8080".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
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
        Self { request_secs: 15 }
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Enable rate limiting.
    pub enabled: bool,

    /// Tokens refilled per second per client.
    pub requests_per_second: u32,

    /// Burst capacity.
    pub burst_size: u32,

    /// Drop a client's bucket after this many idle seconds.
    pub idle_expiry_secs: u64,

    /// Upper bound on tracked clients.
    pub max_tracked_clients: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests_per_second: 1,
            burst_size: 10,
            idle_expiry_secs: 600,
            max_tracked_clients: 100_000,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security headers.
    pub enable_headers: bool,
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
            max_body_size: 64 * 1024,
        }
    }
}

/// CSS build and static file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root of the static tree served under `/static`.
    pub static_dir: String,

    /// Directory holding the ITCSS layer directories.
    pub css_dir: String,

    /// Generated stylesheet.
    pub css_output: String,

    /// Watcher poll interval in milliseconds (dev mode only).
    pub watch_interval_ms: u64,

    /// Browser cache lifetime for static responses.
    pub cache_max_age_secs: u64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
            css_dir: "static/css".to_string(),
            css_output: "static/css/style.css".to_string(),
            watch_interval_ms: 1000,
            cache_max_age_secs: 3600,
        }
    }
}

/// Template locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory containing `layouts/`, `components/` and `pages/`.
    pub dir: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: "templates".to_string(),
        }
    }
}

/// Mock data fixture location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Directory of JSON page fixtures.
    pub dir: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            dir: "data/fixtures".to_string(),
        }
    }
}

/// Feedback collection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Append-only feedback log.
    pub path: String,

    /// Maximum accepted feedback length in characters.
    pub max_length: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            path: "data/feedback.txt".to_string(),
            max_length: 5000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,

    /// Force JSON logs even in development.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "circles_site=debug,tower_http=debug".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
