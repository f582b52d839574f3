//! Page, asset and middleware behaviour driven through the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

use circles_site::security::headers::CONTENT_SECURITY_POLICY;

mod common;
use common::{body_text, TestSite};

fn assert_security_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-xss-protection"], "1; mode=block");
    assert_eq!(headers["content-security-policy"], CONTENT_SECURITY_POLICY);
    assert_eq!(headers["referrer-policy"], "strict-origin-when-cross-origin");
    assert_eq!(
        headers["permissions-policy"],
        "camera=(), microphone=(), geolocation=()"
    );
}

#[tokio::test]
async fn test_home_renders_form_with_token() {
    let site = TestSite::new();
    let response = site.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_security_headers(response.headers());
    assert!(response.headers().contains_key("x-request-id"));

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/feedback""#));
    assert!(html.contains(r#"name="website""#));
    assert!(html.contains(r#"name="email_address""#));
    assert!(!html.contains("Thank you"));

    let marker = r#"name="csrf_token" value=""#;
    let start = html.find(marker).unwrap() + marker.len();
    let token = &html[start..start + 64];
    assert!(circles_site::security::csrf::is_well_formed(token));
}

#[tokio::test]
async fn test_unknown_path_is_404_with_headers() {
    let site = TestSite::new();
    let response = site.get("/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_security_headers(response.headers());
}

#[tokio::test]
async fn test_mock_pages_render() {
    let site = TestSite::new();

    for (uri, title, nav_marker) in [
        ("/dashboard", "Dashboard", "Oak coffee table project"),
        ("/circles", "Circles", "Recent activity"),
        ("/chat", "Chat", "chat__thread"),
        ("/gather", "Gather", "Monthly Showcase"),
        ("/marketplace", "Marketplace", "Cordless Drill"),
    ] {
        let response = site.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains(&format!("<title>{title} · circles.diy</title>")), "{uri}");
        assert!(html.contains(nav_marker), "{uri}");
        assert!(html.contains("nav__link--active"), "{uri}");
    }
}

#[tokio::test]
async fn test_fixture_text_is_escaped() {
    let site = TestSite::new();
    let html = body_text(site.get("/dashboard").await).await;
    assert!(html.contains("Drum &amp; Bass"));
    assert!(!html.contains("Drum & Bass"));
}

#[tokio::test]
async fn test_own_profile_is_owner_view() {
    let site = TestSite::new();
    let response = site.get("/profile").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<title>My Profile · circles.diy</title>"));
    assert!(html.contains(r#"data-view="internal" data-owner="true""#));
    assert!(html.contains("Point of Sale"));
    assert!(html.contains("Drafts (1)"));
}

#[tokio::test]
async fn test_public_profile_uses_handle_in_title() {
    let site = TestSite::new();
    let response = site.get("/profile/ruby").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<title>ruby - Profile · circles.diy</title>"));
    assert!(html.contains(r#"data-view="public" data-owner="false""#));
    assert!(!html.contains("Point of Sale"));
}

#[tokio::test]
async fn test_profile_trailing_slash_is_404() {
    let site = TestSite::new();
    assert_eq!(site.get("/profile/").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stylesheet_cache_headers_and_304() {
    let site = TestSite::new();
    let response = site.get("/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert_eq!(headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=3600");
    assert_eq!(headers[header::VARY], "Accept-Encoding");
    let last_modified = headers[header::LAST_MODIFIED].to_str().unwrap().to_string();

    let css = body_text(response).await;
    assert!(css.starts_with("/* Generated CSS - circles.diy */"));
    assert!(css.contains("/* === ITCSS Layer: 01-settings === */"));
    assert!(css.contains("@media (min-width: 768px)"));

    let conditional = site
        .send(
            Request::get("/static/css/style.css")
                .header(header::IF_MODIFIED_SINCE, &last_modified)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(conditional.status(), StatusCode::NOT_MODIFIED);
    assert_security_headers(conditional.headers());
}

#[tokio::test]
async fn test_images() {
    let site = TestSite::new();

    let svg = site.get("/static/img/favicon.svg").await;
    assert_eq!(svg.status(), StatusCode::OK);
    assert_eq!(svg.headers()[header::CONTENT_TYPE], "image/svg+xml");
    assert!(!svg.headers().contains_key(header::VARY));

    let unsupported = site.get("/static/img/notes.txt").await;
    assert_eq!(unsupported.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(unsupported).await, "Unsupported image format");

    for uri in [
        "/static/img/..%2F..%2FCargo.png",
        "/static/img//etc/hostname.png",
        "/static/img/%2Fetc%2Fx.png",
    ] {
        let escaped = site.get(uri).await;
        assert_eq!(escaped.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_text(escaped).await, "Invalid file path", "{uri}");
    }

    assert_eq!(
        site.get("/static/img/missing.png").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_service_worker_and_manifest() {
    let site = TestSite::new();

    let root = site.get("/sw.js").await;
    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(root.headers()["service-worker-allowed"], "/");
    assert!(root.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("application/javascript"));

    assert_eq!(site.get("/static/js/sw.js").await.status(), StatusCode::OK);

    let manifest = site.get("/manifest.json").await;
    assert_eq!(manifest.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(manifest).await).unwrap();
    assert_eq!(json["name"], "circles.diy");
}

#[tokio::test]
async fn test_missing_htmx_is_404() {
    let site = TestSite::new();
    assert_eq!(
        site.get("/static/js/htmx.min.js").await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let site = TestSite::with_config(|c| c.rate_limit.burst_size = 3);

    let from = |ip: &str| {
        Request::get("/")
            .header("x-forwarded-for", format!("{ip}, 10.0.0.1"))
            .body(Body::empty())
            .unwrap()
    };

    for _ in 0..3 {
        assert_eq!(site.send(from("203.0.113.9")).await.status(), StatusCode::OK);
    }

    let limited = site.send(from("203.0.113.9")).await;
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_security_headers(limited.headers());
    assert_eq!(body_text(limited).await, "Rate limit exceeded");

    assert_eq!(site.send(from("198.51.100.2")).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_can_be_disabled() {
    let site = TestSite::with_config(|c| {
        c.rate_limit.enabled = false;
        c.rate_limit.burst_size = 1;
    });
    for _ in 0..5 {
        assert_eq!(site.get("/dashboard").await.status(), StatusCode::OK);
    }
}
