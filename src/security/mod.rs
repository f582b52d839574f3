//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → headers.rs (security headers on every response)
//!     → rate_limit.rs (per-IP token bucket, 429 on exhaustion)
//!     → Pass to routing
//!
//! Form rendering / submission:
//!     → csrf.rs (mint per render, shape-check on submit)
//! ```
//!
//! # Design Decisions
//! - Headers wrap the limiter so rejected requests are still hardened
//! - Limiter state is an injected service, not a global

pub mod csrf;
pub mod headers;
pub mod rate_limit;

pub use rate_limit::RateLimiter;
