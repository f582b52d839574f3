//! Mock-data pages.
//!
//! Each handler clones its fixture payload, stamps a fresh CSRF token and
//! renders. The data never varies by request.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::http::response::{render, AppError};
use crate::http::server::AppState;
use crate::templates::PageKey;

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Dashboard, &state.fixtures.dashboard())
}

pub async fn circles(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Circles, &state.fixtures.circles())
}

pub async fn chat(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Chat, &state.fixtures.chat())
}

pub async fn gather(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Gather, &state.fixtures.gather())
}

pub async fn marketplace(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Marketplace, &state.fixtures.marketplace())
}

/// `/profile`: the viewer's own profile.
pub async fn own_profile(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(
        &state.templates,
        PageKey::ProfileInternal,
        &state.fixtures.profile_internal(),
    )
}

/// `/profile/{handle}`: someone else's profile.
pub async fn public_profile(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Html<String>, AppError> {
    if handle.trim().is_empty() {
        return Err(AppError::NotFound);
    }
    render(
        &state.templates,
        PageKey::ProfilePublic,
        &state.fixtures.profile_public(&handle),
    )
}
