use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// A thread in the chat sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub time_ago: String,
    pub unread_count: u32,
    pub is_group: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub circle: String,
    pub online: bool,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: String,
    pub sender: User,
    pub content: String,
    pub time_ago: String,
    /// Sent by the viewing user.
    pub is_own: bool,
}
