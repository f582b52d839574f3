//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid environment variable {name}: {value:?}")]
    Env { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then `PORT` / `ENV` overrides,
/// then validation.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => SiteConfig::default(),
    };

    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PORT` and `ENV` from the given lookup. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: SiteConfig, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::Env {
            name: "PORT",
            value: port.clone(),
        })?;
    }

    if let Some(env) = lookup("ENV").filter(|v| !v.is_empty()) {
        config.environment = env;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = apply_env_overrides(SiteConfig::default(), lookup(&[])).unwrap();
        assert_eq!(config.listener.port, 8080);
        assert!(config.is_dev());
    }

    #[test]
    fn test_port_and_env_override() {
        let config = apply_env_overrides(
            SiteConfig::default(),
            lookup(&[("PORT", "3000"), ("ENV", "production")]),
        )
        .unwrap();
        assert_eq!(config.listener.bind_address(), "0.0.0.0:3000");
        assert!(!config.is_dev());
    }

    #[test]
    fn test_non_production_env_is_dev() {
        let config =
            apply_env_overrides(SiteConfig::default(), lookup(&[("ENV", "staging")])).unwrap();
        assert!(config.is_dev());
    }

    #[test]
    fn test_bad_port() {
        let err = apply_env_overrides(SiteConfig::default(), lookup(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: "PORT", .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[rate_limit]\nburst_size = 3\n\n[feedback]\npath = \"/tmp/fb.txt\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.rate_limit.burst_size, 3);
        assert_eq!(config.rate_limit.requests_per_second, 1);
        assert_eq!(config.feedback.path, "/tmp/fb.txt");
    }

    #[test]
    fn test_invalid_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("timeouts.request_secs"));
    }
}
