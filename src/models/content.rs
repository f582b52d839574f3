use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostStats {
    pub replies: u32,
    pub shares: u32,
    pub views: u32,
}

/// An entry in the dashboard feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedItem {
    pub id: String,
    pub user: User,
    pub content: String,
    pub time_ago: String,
    pub circle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaItem>,
    pub can_buy: bool,
}

/// A post on a profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: String,
    pub user: User,
    pub content: String,
    pub time_ago: String,
    pub circle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaItem>,
    pub can_buy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PostStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftPost {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaItem>,
}
