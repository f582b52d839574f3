//! Append-only feedback log.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Persona recorded when the visitor picked none.
pub const DEFAULT_PERSONA: &str = "curious-observer";

#[derive(Debug, Error)]
pub enum FeedbackStoreError {
    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open feedback file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write feedback: {0}")]
    Write(#[source] std::io::Error),
}

/// One accepted submission.
#[derive(Debug, Clone)]
pub struct FeedbackEntry {
    pub received_at: DateTime<Local>,
    /// Already escaped feedback text.
    pub text: String,
    /// Escaped persona labels, never empty.
    pub personas: Vec<String>,
}

impl FeedbackEntry {
    /// Build an entry, escaping persona labels and applying the default.
    pub fn new(text: String, personas: &[String]) -> Self {
        let personas: Vec<String> = personas
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(tera::escape_html)
            .collect();

        Self {
            received_at: Local::now(),
            text,
            personas: if personas.is_empty() {
                vec![DEFAULT_PERSONA.to_string()]
            } else {
                personas
            },
        }
    }

    pub fn persona_list(&self) -> String {
        self.personas.join(", ")
    }

    /// Log record, blank-line terminated.
    pub fn format(&self) -> String {
        format!(
            "=== Feedback received {} ===\nPersonas: {}\n{}\n\n",
            self.received_at.format("%Y-%m-%d %H:%M:%S"),
            self.persona_list(),
            self.text
        )
    }
}

/// Appends entries to a local file, one writer at a time.
#[derive(Debug)]
pub struct FeedbackStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, entry: &FeedbackEntry) -> Result<(), FeedbackStoreError> {
        let _guard = self.write_lock.lock().await;

        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| FeedbackStoreError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|source| FeedbackStoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(entry.format().as_bytes())
            .await
            .map_err(FeedbackStoreError::Write)?;
        file.flush().await.map_err(FeedbackStoreError::Write)?;

        Ok(())
    }
}
