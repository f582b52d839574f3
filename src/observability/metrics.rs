//! Metrics collection and exposition.
//!
//! # Metrics
//! - `circles_requests_total` (counter): requests by method, route, status
//! - `circles_request_duration_seconds` (histogram): handler latency
//! - `circles_rate_limited_total` (counter): requests rejected with 429
//! - `circles_feedback_total` (counter): feedback submissions by outcome
//! - `circles_css_builds_total` (counter): CSS builds by result
//! - `circles_css_build_duration_seconds` (histogram)
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus
//! recorder, so call sites never check whether metrics are enabled.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    ::metrics::counter!("circles_requests_total", &labels).increment(1);
    ::metrics::histogram!("circles_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_rate_limited() {
    ::metrics::counter!("circles_rate_limited_total").increment(1);
}

/// `outcome` is `accepted` or the rejection reason.
pub fn record_feedback(outcome: &'static str) {
    ::metrics::counter!("circles_feedback_total", "outcome" => outcome).increment(1);
}

pub fn record_css_build(ok: bool, start: Instant) {
    let result = if ok { "ok" } else { "error" };
    ::metrics::counter!("circles_css_builds_total", "result" => result).increment(1);
    ::metrics::histogram!("circles_css_build_duration_seconds")
        .record(start.elapsed().as_secs_f64());
}

/// Per-request counter and latency, labelled by matched route template.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
