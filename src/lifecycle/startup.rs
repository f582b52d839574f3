//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the stylesheet once
//! - Parse every template set and load fixtures
//! - Assemble the shared `AppState`
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - The listener is bound by the caller, after this succeeds

use thiserror::Error;

use crate::assets::{BuildReport, CssBuilder, CssError};
use crate::config::SiteConfig;
use crate::http::AppState;
use crate::mock::{FixtureError, FixtureStore};
use crate::templates::{TemplateError, TemplateManager};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("CSS build failed: {0}")]
    Css(#[from] CssError),

    #[error("template initialization failed: {0}")]
    Templates(#[from] TemplateError),

    #[error("fixture loading failed: {0}")]
    Fixtures(#[from] FixtureError),
}

/// Run every fallible initialisation step and return ready-to-serve state.
pub fn prepare(config: SiteConfig) -> Result<AppState, StartupError> {
    build_css(&config)?;

    let templates = TemplateManager::init(&config.templates.dir)?;
    let fixtures = FixtureStore::load(&config.fixtures.dir)?;

    Ok(AppState::new(config, templates, fixtures))
}

pub fn build_css(config: &SiteConfig) -> Result<BuildReport, CssError> {
    CssBuilder::from_config(&config.assets).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_templates_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.assets.css_dir = dir.path().join("css").display().to_string();
        config.assets.css_output = dir.path().join("css/style.css").display().to_string();
        config.templates.dir = dir.path().join("templates").display().to_string();

        assert!(matches!(prepare(config), Err(StartupError::Templates(_))));
    }
}
