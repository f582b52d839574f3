//! Display-oriented value types.
//!
//! Nothing here has identity or a lifecycle beyond a single render: values
//! are cloned out of the fixture store, decorated with per-request data and
//! handed to a template.

pub mod analytics;
pub mod chat;
pub mod community;
pub mod content;
pub mod marketplace;
pub mod page_data;
pub mod user;

pub use analytics::{Analytics, ImpactItem};
pub use chat::{Conversation, Message};
pub use community::{
    Circle, CircleActivity, CircleStats, Discussion, Event, Gathering, LinkPreview, Ripple,
};
pub use content::{DraftPost, FeedItem, MediaItem, Post, PostStats};
pub use marketplace::{Location, MarketplaceCategory, MarketplaceFilter, MarketplaceItem};
pub use page_data::{
    BaseData, ChatContent, CirclesContent, DashboardContent, GatherContent, HomeContent,
    MarketplaceContent, PageData, ProfileContent, ThemeSettings,
};
pub use user::{Extension, Profile, ProfileStats, User};
