use serde::{Deserialize, Serialize};

use crate::models::content::MediaItem;
use crate::models::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub banner: String,
    pub member_count: String,
    pub online_count: String,
    /// owner, admin or member
    pub user_role: String,
    pub joined_date: String,
    pub last_activity: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discussion {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub circle: String,
    pub time_ago: String,
}

/// Compact calendar entry used in sidebars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub time: String,
    pub day: String,
    pub month: String,
}

/// Full event card for the gather page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gathering {
    pub id: String,
    pub title: String,
    pub description: String,
    pub day: String,
    pub month: String,
    pub time: String,
    pub location: String,
    pub circle: String,
    pub host: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    pub attendee_count: u32,
    pub capacity: u32,
    pub is_attending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPreview {
    pub url: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    pub domain: String,
}

/// Short-lived post that expires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ripple {
    pub id: String,
    pub user: User,
    pub content: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkPreview>,
    pub expires_in: String,
    pub circle: String,
    pub view_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleActivity {
    pub id: String,
    pub circle_id: String,
    /// post, member_joined, event or announcement
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
    pub user: String,
    pub time_ago: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStats {
    pub total_posts: u32,
    pub active_members: u32,
    pub recent_activity: String,
    pub weekly_growth: String,
    pub engagement_rate: String,
}
