//! JSON-backed mock page payloads.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    BaseData, ChatContent, CirclesContent, DashboardContent, GatherContent, HomeContent,
    MarketplaceContent, PageData, ProfileContent, ThemeSettings,
};
use crate::security::csrf;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Page payloads loaded once at startup.
///
/// Every accessor clones the stored content and wraps it in a fresh
/// `BaseData` with a newly minted CSRF token.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    dashboard: DashboardContent,
    profile: ProfileContent,
    profile_internal: ProfileContent,
    circles: CirclesContent,
    chat: ChatContent,
    gather: GatherContent,
    marketplace: MarketplaceContent,
}

impl FixtureStore {
    /// Load every fixture file from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let dir = dir.as_ref();

        let store = Self {
            dashboard: read_fixture(dir, "dashboard.json")?,
            profile: read_fixture(dir, "profile.json")?,
            profile_internal: read_fixture(dir, "profile_internal.json")?,
            circles: read_fixture(dir, "circles.json")?,
            chat: read_fixture(dir, "chat.json")?,
            gather: read_fixture(dir, "gather.json")?,
            marketplace: read_fixture(dir, "marketplace.json")?,
        };

        tracing::debug!(dir = %dir.display(), "Fixtures loaded");
        Ok(store)
    }

    pub fn home(&self, success: bool) -> PageData<HomeContent> {
        page("circles.diy", "", HomeContent { success })
    }

    pub fn dashboard(&self) -> PageData<DashboardContent> {
        page("Dashboard", "dashboard", self.dashboard.clone())
    }

    /// Someone else's profile. The handle only affects the title.
    pub fn profile_public(&self, handle: &str) -> PageData<ProfileContent> {
        let mut content = self.profile.clone();
        content.is_owner = false;
        page(&format!("{handle} - Profile"), "profile", content)
    }

    /// The viewer's own profile with owner-only panels.
    pub fn profile_internal(&self) -> PageData<ProfileContent> {
        let mut content = self.profile_internal.clone();
        content.is_owner = true;
        content.draft_count = content.drafts.len();
        page("My Profile", "profile", content)
    }

    pub fn circles(&self) -> PageData<CirclesContent> {
        page("Circles", "circles", self.circles.clone())
    }

    pub fn chat(&self) -> PageData<ChatContent> {
        page("Chat", "chat", self.chat.clone())
    }

    pub fn gather(&self) -> PageData<GatherContent> {
        page("Gather", "gather", self.gather.clone())
    }

    pub fn marketplace(&self) -> PageData<MarketplaceContent> {
        page("Marketplace", "marketplace", self.marketplace.clone())
    }
}

fn page<T>(title: &str, active_nav: &str, content: T) -> PageData<T> {
    PageData {
        base: BaseData {
            title: title.to_string(),
            active_nav: active_nav.to_string(),
            theme: ThemeSettings::default(),
            csrf_token: csrf::generate_token(),
        },
        content,
    }
}

fn read_fixture<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, FixtureError> {
    let path = dir.join(name);
    let raw = fs::read_to_string(&path).map_err(|source| FixtureError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> FixtureStore {
        FixtureStore::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures")).unwrap()
    }

    #[test]
    fn test_bundled_fixtures_load() {
        let store = bundled();
        let dashboard = store.dashboard();
        assert_eq!(dashboard.base.title, "Dashboard");
        assert_eq!(dashboard.base.active_nav, "dashboard");
        assert!(!dashboard.content.feed.is_empty());
        assert_eq!(dashboard.content.feed_offset, dashboard.content.feed.len());
    }

    #[test]
    fn test_profile_views() {
        let store = bundled();

        let public = store.profile_public("@ruby");
        assert_eq!(public.base.title, "@ruby - Profile");
        assert!(!public.content.is_owner);
        assert!(public.content.extensions.is_empty());

        let own = store.profile_internal();
        assert_eq!(own.base.title, "My Profile");
        assert!(own.content.is_owner);
        assert_eq!(own.content.draft_count, own.content.drafts.len());
        assert!(!own.content.extensions.is_empty());
    }

    #[test]
    fn test_every_page_gets_fresh_token() {
        let store = bundled();
        let a = store.circles().base.csrf_token;
        let b = store.circles().base.csrf_token;
        assert!(csrf::is_well_formed(&a));
        assert_ne!(a, b);
        assert_eq!(store.home(true).base.theme, ThemeSettings::default());
    }

    #[test]
    fn test_missing_dir_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Read { .. }));
    }

    #[test]
    fn test_malformed_fixture_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dashboard.json"), "{ not json").unwrap();
        let err = FixtureStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
