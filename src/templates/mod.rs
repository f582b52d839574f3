//! Server-side HTML rendering.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     templates/layouts/*.html + components/*.html + pages/<page>.html
//!         → manager.rs (one Tera set per page, helper functions registered)
//!
//! Per request:
//!     handler → TemplateManager::render(PageKey, &PageData<T>) → HTML
//! ```

pub mod functions;
pub mod manager;

pub use manager::{PageKey, TemplateError, TemplateManager};
