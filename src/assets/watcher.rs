//! Stylesheet watcher for development mode.
//!
//! Polls the CSS source tree for modification-time changes and reruns the
//! build. The generated output lives inside the watched tree, so events for it
//! are ignored to avoid a rebuild loop.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, PollWatcher, RecursiveMode, Watcher};
use tokio::sync::broadcast;

use crate::assets::css::CssBuilder;

/// Watches CSS sources and rebuilds on change.
pub struct CssWatcher {
    builder: CssBuilder,
    interval: Duration,
}

impl CssWatcher {
    pub fn new(builder: CssBuilder, interval: Duration) -> Self {
        Self { builder, interval }
    }

    /// Start the poll watcher.
    ///
    /// The returned handle must be kept alive; dropping it stops polling.
    pub fn start(self) -> Result<PollWatcher, notify::Error> {
        let output = canonical(self.builder.output());
        let builder = self.builder.clone();

        let mut watcher = PollWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_access() {
                        return;
                    }
                    if let Some(path) = event.paths.iter().find(|p| is_source_change(p, &output)) {
                        tracing::info!(path = %path.display(), "CSS source changed, rebuilding");
                        if let Err(e) = builder.build() {
                            tracing::error!(error = %e, "CSS rebuild failed");
                        }
                    }
                }
                Err(e) => tracing::error!(error = ?e, "CSS watch error"),
            },
            Config::default().with_poll_interval(self.interval),
        )?;

        watcher.watch(self.builder.css_dir(), RecursiveMode::Recursive)?;

        tracing::info!(
            dir = %self.builder.css_dir().display(),
            interval_ms = self.interval.as_millis() as u64,
            "CSS watcher started"
        );
        Ok(watcher)
    }

    /// Watch until the shutdown signal fires.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let watcher = match self.start() {
            Ok(w) => w,
            Err(e) => {
                tracing::error!(error = %e, "Failed to start CSS watcher");
                return;
            }
        };

        let _ = shutdown.recv().await;
        drop(watcher);
        tracing::info!("CSS watcher stopped");
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// True for a `.css` path that is not the generated output.
pub fn is_source_change(path: &Path, output: &Path) -> bool {
    if !path.extension().is_some_and(|ext| ext == "css") {
        return false;
    }
    canonical(path) != output && path != output
}
