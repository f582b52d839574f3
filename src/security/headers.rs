//! Security response headers.
//!
//! Every response, including errors and 429s, carries the same static set.
//! The CSP allows self-hosted htmx plus the image and video hosts the mock
//! content points at.

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    style-src 'self' 'unsafe-inline'; \
    script-src 'self' 'unsafe-inline' 'unsafe-eval'; \
    img-src 'self' https://images.unsplash.com https://unsplash.com https://media.tenor.com data:; \
    media-src 'self' https://www.pexels.com https://videos.pexels.com data:; \
    font-src 'self'; \
    connect-src 'self'; \
    object-src 'none'; \
    base-uri 'self'; \
    form-action 'self'; \
    frame-ancestors 'none'";

/// The static header set.
pub fn security_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ),
    ]
}

/// Wrap a router so every response gets the security headers.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    security_headers()
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(name, value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_set() {
        let headers = security_headers();
        assert_eq!(headers.len(), 6);
        assert!(headers
            .iter()
            .any(|(n, v)| n == header::X_FRAME_OPTIONS && v == "DENY"));
    }

    #[test]
    fn test_csp_blocks_framing_and_plugins() {
        assert!(CONTENT_SECURITY_POLICY.contains("frame-ancestors 'none'"));
        assert!(CONTENT_SECURITY_POLICY.contains("object-src 'none'"));
        assert!(!CONTENT_SECURITY_POLICY.contains('\n'));
    }
}
