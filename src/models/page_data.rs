//! Per-page render inputs.
//!
//! Every page is `PageData<Content>`: the shared `BaseData` flattened next to
//! the page's own fields, so templates see one flat namespace.

use serde::{Deserialize, Serialize};

use crate::models::analytics::{Analytics, ImpactItem};
use crate::models::chat::{Conversation, Message};
use crate::models::community::{
    Circle, CircleActivity, CircleStats, Discussion, Event, Gathering, Ripple,
};
use crate::models::content::{DraftPost, FeedItem, Post};
use crate::models::marketplace::{MarketplaceCategory, MarketplaceFilter, MarketplaceItem};
use crate::models::user::{Extension, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    /// light, dark or system
    pub mode: String,
    /// corner radius in px: 0, 6, 12 or 32
    pub radius: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: "system".to_string(),
            radius: "0".to_string(),
        }
    }
}

/// Fields every layout needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseData {
    pub title: String,
    pub active_nav: String,
    pub theme: ThemeSettings,
    pub csrf_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData<T> {
    #[serde(flatten)]
    pub base: BaseData,
    #[serde(flatten)]
    pub content: T,
}

/// Landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Feedback was just accepted.
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub feed: Vec<FeedItem>,
    pub feed_offset: usize,
    pub circles: Vec<Circle>,
    pub discussions: Vec<Discussion>,
    pub events: Vec<Event>,
    pub ripples: Vec<Ripple>,
    pub marketplace_items: Vec<MarketplaceItem>,
    pub impact: Vec<ImpactItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileContent {
    pub profile: Profile,
    pub posts: Vec<Post>,
    pub post_offset: usize,
    pub has_more_posts: bool,
    pub is_owner: bool,
    pub extensions: Vec<Extension>,
    pub analytics: Analytics,
    pub drafts: Vec<DraftPost>,
    pub draft_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclesContent {
    pub circles: Vec<Circle>,
    pub recent_activity: Vec<CircleActivity>,
    pub stats: CircleStats,
    pub featured_circles: Vec<Circle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatContent {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatherContent {
    pub gatherings: Vec<Gathering>,
    pub circles: Vec<Circle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceContent {
    pub items: Vec<MarketplaceItem>,
    pub categories: Vec<MarketplaceCategory>,
    pub filters: MarketplaceFilter,
}
