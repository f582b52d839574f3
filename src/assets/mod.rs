//! Static assets subsystem.
//!
//! # Data Flow
//! ```text
//! static/css/0N-layer/*.css
//!     → css.rs (concatenate, substitute breakpoints)
//!     → static/css/style.css
//!     → static_files.rs (Last-Modified / If-Modified-Since)
//!
//! Development mode:
//!     watcher.rs polls sources once per second → css.rs rebuild
//! ```

pub mod css;
pub mod static_files;
pub mod watcher;

pub use css::{BuildReport, CssBuilder, CssError};
pub use watcher::CssWatcher;
