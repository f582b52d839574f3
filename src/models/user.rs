use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub banner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileStats {
    pub posts: u32,
    pub connections: u32,
    pub circles: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub id: String,
    pub handle: String,
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub bio: String,
    pub stats: ProfileStats,
    pub is_connected: bool,
}

/// Optional profile feature the owner can toggle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extension {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
}
