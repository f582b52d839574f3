//! Handler error type and its HTTP mapping.
//!
//! # Design Decisions
//! - Client errors carry their exact response text
//! - Server errors are logged here and surface as generic bodies, so template
//!   or filesystem detail never reaches the client

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::feedback::FeedbackStoreError;
use crate::templates::{PageKey, TemplateError, TemplateManager};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Render(#[from] TemplateError),

    #[error(transparent)]
    FeedbackStore(#[from] FeedbackStoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, "404 page not found").into_response(),
            AppError::Render(e) => {
                tracing::error!(error = %e, "Template render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::FeedbackStore(e) => {
                tracing::error!(error = %e, "Failed to store feedback");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
            }
        }
    }
}

/// Render a page to an HTML response.
pub fn render<T: Serialize>(
    templates: &TemplateManager,
    page: PageKey,
    data: &T,
) -> Result<Html<String>, AppError> {
    Ok(Html(templates.render(page, data)?))
}
