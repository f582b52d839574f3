//! Static asset routes.

use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::assets::static_files::{image_content_type, is_contained, serve_file};
use crate::http::server::AppState;

const CSS: &str = "text/css; charset=utf-8";
const JAVASCRIPT: &str = "application/javascript; charset=utf-8";
const MANIFEST: &str = "application/manifest+json";

fn static_path(state: &AppState, parts: &[&str]) -> PathBuf {
    parts
        .iter()
        .fold(PathBuf::from(&state.config.assets.static_dir), |p, part| p.join(part))
}

async fn serve(state: &AppState, path: &FsPath, content_type: &'static str, headers: &HeaderMap) -> Response {
    serve_file(path, content_type, headers, state.config.assets.cache_max_age_secs).await
}

pub async fn stylesheet(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let path = PathBuf::from(&state.config.assets.css_output);
    serve(&state, &path, CSS, &headers).await
}

pub async fn htmx(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let path = static_path(&state, &["js", "htmx.min.js"]);
    serve(&state, &path, JAVASCRIPT, &headers).await
}

/// Service worker, served from `/static/js/sw.js` and from `/sw.js`.
///
/// Both carry `Service-Worker-Allowed: /` so the worker can control every
/// page.
pub async fn service_worker(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let path = static_path(&state, &["js", "sw.js"]);
    let mut response = serve(&state, &path, JAVASCRIPT, &headers).await;
    if response.status().is_success() {
        response
            .headers_mut()
            .insert("service-worker-allowed", HeaderValue::from_static("/"));
    }
    response
}

pub async fn manifest(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let path = static_path(&state, &["manifest.json"]);
    serve(&state, &path, MANIFEST, &headers).await
}

pub async fn image(
    State(state): State<AppState>,
    Path(image): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !is_contained(&image) {
        return (StatusCode::BAD_REQUEST, "Invalid file path").into_response();
    }
    let Some(content_type) = image_content_type(&image) else {
        return (StatusCode::BAD_REQUEST, "Unsupported image format").into_response();
    };

    let path = static_path(&state, &["img"]).join(&image);
    serve(&state, &path, content_type, &headers).await
}
