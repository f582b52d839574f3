//! Shared setup for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::{
    body::{self, Body},
    http::{Request, Response},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use circles_site::config::SiteConfig;
use circles_site::http::{build_router, AppState};
use circles_site::lifecycle;

pub fn repo_path(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(rel)
}

/// A site backed by the bundled templates, fixtures and CSS sources, with
/// the generated stylesheet and feedback log redirected into a scratch dir.
pub struct TestSite {
    pub dir: TempDir,
    pub config: SiteConfig,
    pub state: AppState,
}

impl TestSite {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(customise: impl FnOnce(&mut SiteConfig)) -> Self {
        let dir = tempfile::tempdir().unwrap();

        let mut config = SiteConfig::default();
        config.assets.static_dir = repo_path("static").display().to_string();
        config.assets.css_dir = repo_path("static/css").display().to_string();
        config.assets.css_output = dir.path().join("style.css").display().to_string();
        config.templates.dir = repo_path("templates").display().to_string();
        config.fixtures.dir = repo_path("data/fixtures").display().to_string();
        config.feedback.path = dir.path().join("data/feedback.txt").display().to_string();
        // oneshot requests all share the "unknown" client key
        config.rate_limit.burst_size = 10_000;
        customise(&mut config);

        let state = lifecycle::prepare(config.clone()).unwrap();
        Self { dir, config, state }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn feedback_path(&self) -> PathBuf {
        PathBuf::from(&self.config.feedback.path)
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A token of the right shape, as a browser would echo back.
pub fn csrf_token() -> String {
    circles_site::security::csrf::generate_token()
}
