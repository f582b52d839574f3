use serde::{Deserialize, Serialize};

use crate::models::content::MediaItem;
use crate::models::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    /// sale, trade, free or negotiable
    pub price_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MediaItem>,
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub distance: String,
    pub time_ago: String,
    pub seller: User,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub circle: String,
    pub category: String,
    pub tags: Vec<String>,
    /// new, like-new, good, fair or poor
    pub condition: String,
    pub is_available: bool,
    pub view_count: u32,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceFilter {
    pub price_types: Vec<String>,
    pub categories: Vec<String>,
    pub conditions: Vec<String>,
    pub locations: Vec<Location>,
    pub max_distance: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub count: u32,
}
