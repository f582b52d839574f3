//! circles.diy demo site library.

pub mod assets;
pub mod config;
pub mod feedback;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod mock;
pub mod models;
pub mod observability;
pub mod security;
pub mod templates;

pub use config::schema::SiteConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
