use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analytics {
    pub profile_views: u32,
    pub profile_views_change: i32,
    pub post_engagement: u32,
    pub post_engagement_change: i32,
    pub new_connections: u32,
    pub new_connections_change: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactItem {
    pub label: String,
    pub value: String,
}
