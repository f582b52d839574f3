//! Static file responses with conditional-GET support.
//!
//! # Design Decisions
//! - Any path containing `..` is rejected before touching the filesystem
//! - Modification times compare at one-second resolution, matching the
//!   precision of HTTP dates
//! - Bodies are read whole; assets here are small

use std::io::ErrorKind;
use std::path::{Component, Path};

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};

/// Format used by `Last-Modified` / `If-Modified-Since`.
const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a timestamp as an HTTP date.
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format(HTTP_DATE).to_string()
}

/// Parse an HTTP date; `None` for anything malformed.
pub fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// True when `path` is a plain relative path: no root, prefix, `.` or `..`
/// components, so joining it onto a directory stays inside that directory.
pub fn is_contained(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Content type for a supported image extension.
pub fn image_content_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// True when `If-Modified-Since` is at or after the modification time.
pub fn not_modified(modified: DateTime<Utc>, if_modified_since: Option<&str>) -> bool {
    if_modified_since
        .and_then(parse_http_date)
        .is_some_and(|since| modified.timestamp() <= since.timestamp())
}

/// Serve one file with cache headers.
pub async fn serve_file(
    path: &Path,
    content_type: &'static str,
    request_headers: &HeaderMap,
    max_age_secs: u64,
) -> Response {
    if path.to_string_lossy().contains("..") {
        return (StatusCode::BAD_REQUEST, "Invalid file path").into_response();
    }

    let metadata = match tokio::fs::metadata(path).await {
        Ok(m) if m.is_file() => m,
        Ok(_) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) if e.kind() == ErrorKind::NotFound => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to stat static file");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let modified: DateTime<Utc> = match metadata.modified() {
        Ok(t) => t.into(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "File has no modification time");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };
    let last_modified = http_date(modified);

    let if_modified_since = request_headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok());
    if not_modified(modified, if_modified_since) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        if let Ok(value) = HeaderValue::from_str(&last_modified) {
            response.headers_mut().insert(header::LAST_MODIFIED, value);
        }
        return response;
    }

    let body = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read static file");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
        }
    };

    let mut response = Response::new(Body::from(body));
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    if let Ok(value) = HeaderValue::from_str(&last_modified) {
        headers.insert(header::LAST_MODIFIED, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={max_age_secs}")) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if path.extension().is_some_and(|ext| ext == "css") {
        headers.insert(header::VARY, HeaderValue::from_static("Accept-Encoding"));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_http_date_round_trip() {
        let t = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        assert_eq!(http_date(t), "Sun, 06 Nov 1994 08:49:37 GMT");
        assert_eq!(parse_http_date("Sun, 06 Nov 1994 08:49:37 GMT"), Some(t));
        assert_eq!(parse_http_date("yesterday"), None);
    }

    #[test]
    fn test_not_modified_boundaries() {
        let modified = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
            + Duration::milliseconds(750);
        let at = http_date(modified);
        let after = http_date(modified + Duration::seconds(5));
        let before = http_date(modified - Duration::seconds(5));

        assert!(not_modified(modified, Some(&at)));
        assert!(not_modified(modified, Some(&after)));
        assert!(!not_modified(modified, Some(&before)));
        assert!(!not_modified(modified, Some("garbage")));
        assert!(!not_modified(modified, None));
    }

    #[test]
    fn test_contained_paths() {
        assert!(is_contained("favicon.svg"));
        assert!(is_contained("avatars/maia.png"));
        assert!(!is_contained(""));
        assert!(!is_contained("/etc/hostname.png"));
        assert!(!is_contained("../secret.png"));
        assert!(!is_contained("a/../../b.png"));
        assert!(!is_contained("./favicon.svg"));
    }

    #[test]
    fn test_image_content_types() {
        assert_eq!(image_content_type("a/b/icon.PNG"), Some("image/png"));
        assert_eq!(image_content_type("favicon-dark.svg"), Some("image/svg+xml"));
        assert_eq!(image_content_type("photo.jpeg"), Some("image/jpeg"));
        assert_eq!(image_content_type("script.js"), None);
        assert_eq!(image_content_type("noext"), None);
    }

    #[tokio::test]
    async fn test_serve_file_headers_and_304() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, "body {}").unwrap();

        let response = serve_file(&path, "text/css; charset=utf-8", &HeaderMap::new(), 3600).await;
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
        assert_eq!(headers[header::VARY], "Accept-Encoding");
        let last_modified = headers[header::LAST_MODIFIED].to_str().unwrap().to_string();

        let mut conditional = HeaderMap::new();
        conditional.insert(header::IF_MODIFIED_SINCE, last_modified.parse().unwrap());
        let response = serve_file(&path, "text/css; charset=utf-8", &conditional, 3600).await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);

        let mut stale = HeaderMap::new();
        stale.insert(
            header::IF_MODIFIED_SINCE,
            "Mon, 01 Jan 2001 00:00:00 GMT".parse().unwrap(),
        );
        let response = serve_file(&path, "text/css; charset=utf-8", &stale, 3600).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_and_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = serve_file(&dir.path().join("nope.js"), "text/javascript", &HeaderMap::new(), 60).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let traversal = serve_file(Path::new("static/../Cargo.toml"), "text/plain", &HeaderMap::new(), 60).await;
        assert_eq!(traversal.status(), StatusCode::BAD_REQUEST);
    }
}
