//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PORT / ENV overrides
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → shared with subsystems at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults, so running with no file at all works
//! - Validation separates syntactic (serde) from semantic checks

pub mod breakpoints;
pub mod loader;
pub mod schema;
pub mod validation;

pub use breakpoints::Breakpoints;
pub use loader::{load_config, ConfigError};
pub use schema::{
    AssetConfig, FeedbackConfig, FixtureConfig, ListenerConfig, ObservabilityConfig,
    RateLimitConfig, SecurityConfig, SiteConfig, TemplateConfig, TimeoutConfig,
};
