//! Stylesheet build.
//!
//! Concatenates the ITCSS layers into one generated stylesheet. Layers are
//! processed in specificity order and files within a layer by name. Inside
//! `@media` preludes, `var(--breakpoint-*)` is replaced with the literal
//! breakpoint value; custom properties elsewhere are left alone.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::config::{AssetConfig, Breakpoints};
use crate::observability::metrics;

/// ITCSS layer directories, in output order.
pub const LAYERS: [&str; 7] = [
    "01-settings",
    "02-tools",
    "03-generic",
    "04-elements",
    "05-objects",
    "06-components",
    "07-utilities",
];

const HEADER: &str = "/* Generated CSS - circles.diy */\n\n";

#[derive(Debug, Error)]
pub enum CssError {
    #[error("failed to list CSS files in {path}: {source}")]
    ListLayer {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read CSS file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output CSS file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Source files in the order they were written.
    pub files: Vec<PathBuf>,
    /// Layers with no directory or no `.css` files.
    pub skipped_layers: Vec<&'static str>,
    /// Size of the generated stylesheet.
    pub bytes: usize,
}

/// Builds the generated stylesheet from the layer directories.
#[derive(Debug, Clone)]
pub struct CssBuilder {
    css_dir: PathBuf,
    output: PathBuf,
    breakpoints: Breakpoints,
}

impl CssBuilder {
    pub fn new(css_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            css_dir: css_dir.into(),
            output: output.into(),
            breakpoints: Breakpoints::default(),
        }
    }

    pub fn from_config(config: &AssetConfig) -> Self {
        Self::new(&config.css_dir, &config.css_output)
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn css_dir(&self) -> &Path {
        &self.css_dir
    }

    /// Run the build and write the output file.
    ///
    /// The stylesheet is assembled in memory and written in one call, so a
    /// reader never sees a half-truncated file from this process.
    pub fn build(&self) -> Result<BuildReport, CssError> {
        let start = Instant::now();
        let result = self.build_inner();
        metrics::record_css_build(result.is_ok(), start);
        result
    }

    fn build_inner(&self) -> Result<BuildReport, CssError> {
        let mut report = BuildReport::default();
        let mut out = String::from(HEADER);

        for layer in LAYERS {
            let dir = self.css_dir.join(layer);
            if !dir.is_dir() {
                tracing::debug!(layer, "CSS layer directory not found, skipping");
                report.skipped_layers.push(layer);
                continue;
            }

            let files = list_css_files(&dir)?;
            if files.is_empty() {
                tracing::debug!(layer, "No CSS files in layer, skipping");
                report.skipped_layers.push(layer);
                continue;
            }

            out.push_str(&format!("/* === ITCSS Layer: {layer} === */\n"));

            for path in files {
                let content = fs::read_to_string(&path).map_err(|source| CssError::Read {
                    path: path.clone(),
                    source,
                })?;

                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                out.push_str(&format!("/* --- {name} --- */\n"));
                out.push_str(&substitute_media_variables(&content, &self.breakpoints));
                out.push_str("\n\n");

                tracing::debug!(file = %path.display(), "Added to compiled CSS");
                report.files.push(path);
            }
        }

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CssError::Write {
                path: self.output.clone(),
                source,
            })?;
        }
        fs::write(&self.output, &out).map_err(|source| CssError::Write {
            path: self.output.clone(),
            source,
        })?;

        report.bytes = out.len();
        tracing::info!(
            output = %self.output.display(),
            files = report.files.len(),
            bytes = report.bytes,
            "CSS compiled"
        );
        Ok(report)
    }
}

fn list_css_files(dir: &Path) -> Result<Vec<PathBuf>, CssError> {
    let entries = fs::read_dir(dir).map_err(|source| CssError::ListLayer {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CssError::ListLayer {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "css") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Replace breakpoint variables inside `@media` preludes only.
pub fn substitute_media_variables(css: &str, breakpoints: &Breakpoints) -> String {
    let variables = breakpoints.variables();
    let mut out = String::with_capacity(css.len());
    let mut rest = css;

    while let Some(at) = rest.find("@media") {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];
        // The prelude runs up to the opening brace of the block.
        let end = tail.find('{').map_or(tail.len(), |i| i + 1);
        let mut prelude = tail[..end].to_string();

        if prelude.contains("var(--breakpoint-") {
            for (name, value) in &variables {
                prelude = prelude.replace(&format!("var({name})"), value);
            }
        }

        out.push_str(&prelude);
        rest = &tail[end..];
    }

    out.push_str(rest);
    out
}
