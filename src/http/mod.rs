//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, client address)
//!     → handlers (pages, feedback, assets)
//!     → response.rs (AppError → status + generic body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{client_ip, RequestUuid, X_REQUEST_ID};
pub use response::AppError;
pub use server::{build_router, AppState, HttpServer};
