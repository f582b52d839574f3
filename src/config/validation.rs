//! Configuration validation.
//!
//! Serde handles syntax; this checks value ranges and paths. All problems are
//! collected so a broken config is reported in one pass.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::SiteConfig;

/// A single semantic problem in a loaded config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `rate_limit.burst_size`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a config, returning every error found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address().parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.host",
            format!("'{}' is not a valid bind address", config.listener.bind_address()),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.rate_limit.enabled {
        if config.rate_limit.requests_per_second == 0 {
            errors.push(ValidationError::new(
                "rate_limit.requests_per_second",
                "must be greater than 0",
            ));
        }
        if config.rate_limit.burst_size == 0 {
            errors.push(ValidationError::new("rate_limit.burst_size", "must be greater than 0"));
        }
        if config.rate_limit.idle_expiry_secs == 0 {
            errors.push(ValidationError::new(
                "rate_limit.idle_expiry_secs",
                "must be greater than 0",
            ));
        }
        if config.rate_limit.max_tracked_clients == 0 {
            errors.push(ValidationError::new(
                "rate_limit.max_tracked_clients",
                "must be greater than 0",
            ));
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::new("security.max_body_size", "must be greater than 0"));
    }

    if config.assets.watch_interval_ms == 0 {
        errors.push(ValidationError::new("assets.watch_interval_ms", "must be greater than 0"));
    }

    if config.feedback.path.trim().is_empty() {
        errors.push(ValidationError::new("feedback.path", "must not be empty"));
    }

    if config.feedback.max_length == 0 {
        errors.push(ValidationError::new("feedback.max_length", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a valid socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SiteConfig::default();
        config.timeouts.request_secs = 0;
        config.rate_limit.burst_size = 0;
        config.feedback.path = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["timeouts.request_secs", "rate_limit.burst_size", "feedback.path"]
        );
    }

    #[test]
    fn test_rate_limit_values_ignored_when_disabled() {
        let mut config = SiteConfig::default();
        config.rate_limit.enabled = false;
        config.rate_limit.requests_per_second = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_host() {
        let mut config = SiteConfig::default();
        config.listener.host = "not a host".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "listener.host");
    }
}
