//! Structured logging.
//!
//! `RUST_LOG` wins over the configured filter. Development gets the pretty
//! formatter; production (or `json_logs = true`) gets one JSON object per line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SiteConfig;

/// Default filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_FILTER: &str = "circles_site=debug,tower_http=debug";

pub fn init_logging(config: &SiteConfig) {
    let fallback = if config.observability.log_level.is_empty() {
        DEFAULT_FILTER
    } else {
        config.observability.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into());

    let registry = tracing_subscriber::registry().with(filter);
    let json = config.observability.json_logs || !config.is_dev();

    // try_init: tests and the CLI may initialise more than once.
    let result = if json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    if let Err(e) = result {
        eprintln!("logging already initialised: {e}");
    }
}
