//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (tracing events, pretty or JSON)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to the trace span of every request
//! - Metric labels use the matched route template, never the raw path

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
