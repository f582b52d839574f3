//! Per-page template sets.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::templates::functions;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read templates from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no layout templates found in {0}")]
    NoLayouts(PathBuf),

    #[error("failed to parse templates for page `{page}`: {source}")]
    Parse {
        page: &'static str,
        source: tera::Error,
    },

    #[error("page `{0}` has no template set")]
    UnknownPage(&'static str),

    #[error("failed to render page `{page}`: {source}")]
    Render {
        page: &'static str,
        source: tera::Error,
    },
}

/// Logical pages, one template set each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    Dashboard,
    ProfilePublic,
    ProfileInternal,
    Circles,
    Chat,
    Gather,
    Marketplace,
}

impl PageKey {
    pub const ALL: [PageKey; 8] = [
        PageKey::Home,
        PageKey::Dashboard,
        PageKey::ProfilePublic,
        PageKey::ProfileInternal,
        PageKey::Circles,
        PageKey::Chat,
        PageKey::Gather,
        PageKey::Marketplace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Dashboard => "dashboard",
            PageKey::ProfilePublic => "profile-public",
            PageKey::ProfileInternal => "profile-internal",
            PageKey::Circles => "circles",
            PageKey::Chat => "chat",
            PageKey::Gather => "gather",
            PageKey::Marketplace => "marketplace",
        }
    }

    fn template_name(self) -> String {
        format!("pages/{}.html", self.name())
    }
}

/// Parsed template sets, immutable after `init`.
///
/// Each page gets its own `Tera` so block overrides in one page never leak
/// into another. Layouts and components are parsed once per page.
#[derive(Debug)]
pub struct TemplateManager {
    pages: HashMap<PageKey, Tera>,
}

impl TemplateManager {
    /// Parse `layouts/*.html`, `components/*.html` and every page under `dir`.
    pub fn init(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();

        let layouts = read_html_dir(dir, "layouts")?;
        if layouts.is_empty() {
            return Err(TemplateError::NoLayouts(dir.join("layouts")));
        }
        let components = match read_html_dir(dir, "components") {
            Ok(components) => components,
            Err(TemplateError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut pages = HashMap::with_capacity(PageKey::ALL.len());
        for page in PageKey::ALL {
            let name = page.template_name();
            let path = dir.join(&name);
            let source = fs::read_to_string(&path)
                .map_err(|source| TemplateError::Read { path, source })?;

            let mut tera = Tera::default();
            functions::register(&mut tera);

            let mut set: Vec<(String, String)> = layouts.clone();
            set.extend(components.iter().cloned());
            set.push((name, source));

            tera.add_raw_templates(set).map_err(|source| TemplateError::Parse {
                page: page.name(),
                source,
            })?;
            pages.insert(page, tera);
        }

        tracing::info!(
            dir = %dir.display(),
            pages = pages.len(),
            layouts = layouts.len(),
            components = components.len(),
            "Templates initialized"
        );
        Ok(Self { pages })
    }

    /// Render `page` with `data` (any struct serializing to a map).
    pub fn render<T: Serialize>(&self, page: PageKey, data: &T) -> Result<String, TemplateError> {
        let tera = self
            .pages
            .get(&page)
            .ok_or(TemplateError::UnknownPage(page.name()))?;

        let context = Context::from_serialize(data).map_err(|source| TemplateError::Render {
            page: page.name(),
            source,
        })?;

        tera.render(&page.template_name(), &context)
            .map_err(|source| TemplateError::Render {
                page: page.name(),
                source,
            })
    }
}

/// `(name, source)` for every `.html` file in `dir/sub`, sorted by name.
fn read_html_dir(dir: &Path, sub: &str) -> Result<Vec<(String, String)>, TemplateError> {
    let path = dir.join(sub);
    let read_err = |source: std::io::Error| TemplateError::Read {
        path: path.clone(),
        source,
    };

    let mut files: Vec<PathBuf> = fs::read_dir(&path)
        .map_err(read_err)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "html"))
        .collect();
    files.sort();

    files
        .into_iter()
        .map(|file| {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let source = fs::read_to_string(&file).map_err(|source| TemplateError::Read {
                path: file.clone(),
                source,
            })?;
            Ok((format!("{sub}/{file_name}"), source))
        })
        .collect()
}
