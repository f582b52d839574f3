//! Mock data source for the demo pages.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     data/fixtures/*.json → FixtureStore::load (parsed once, immutable)
//!
//! Per request:
//!     handler → FixtureStore::<page>() → clone + fresh BaseData → template
//! ```

pub mod fixtures;

pub use fixtures::{FixtureError, FixtureStore};
