//! Feedback collection: validation and the append-only log.

pub mod store;
pub mod validator;

pub use store::{FeedbackEntry, FeedbackStore, FeedbackStoreError};
pub use validator::{validate_feedback, validate_feedback_with_limit};
