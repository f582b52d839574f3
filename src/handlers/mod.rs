//! Route handlers.
//!
//! # Data Flow
//! ```text
//! page routes:   fixtures → PageData → TemplateManager → HTML (500 on render error)
//! POST /feedback: form → CSRF shape → honeypot → validator → FeedbackStore
//! asset routes:  assets::static_files (Last-Modified, 304, cache headers)
//! ```

pub mod assets;
pub mod home;
pub mod pages;
