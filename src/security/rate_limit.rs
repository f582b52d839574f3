//! Per-client rate limiting.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use moka::sync::Cache;

use crate::config::RateLimitConfig;
use crate::http::request::client_ip;
use crate::observability::metrics;

/// A simple token bucket rate limiter.
#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, now: Instant) -> Self {
        Self {
            tokens: capacity,
            last_update: now,
        }
    }

    fn try_acquire(&mut self, now: Instant, capacity: f64, refill_rate: f64) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = (self.tokens + elapsed * refill_rate).min(capacity);
        if now > self.last_update {
            self.last_update = now;
        }

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Token buckets keyed by client IP.
///
/// Buckets are created full on first sight and live in a bounded cache that
/// drops clients after an idle period, so memory stays bounded no matter how
/// many distinct addresses show up.
pub struct RateLimiter {
    buckets: Cache<String, Arc<Mutex<TokenBucket>>>,
    refill_rate: f64,
    burst: f64,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        let buckets = Cache::builder()
            .max_capacity(config.max_tracked_clients)
            .time_to_idle(Duration::from_secs(config.idle_expiry_secs))
            .build();

        Self {
            buckets,
            refill_rate: f64::from(config.requests_per_second),
            burst: f64::from(config.burst_size),
        }
    }

    /// Admit or reject one request from `client`.
    pub fn allow(&self, client: &str) -> bool {
        self.allow_at(client, Instant::now())
    }

    /// `allow` with an explicit clock reading.
    pub fn allow_at(&self, client: &str, now: Instant) -> bool {
        let bucket = self
            .buckets
            .get_with_by_ref(client, || Arc::new(Mutex::new(TokenBucket::new(self.burst, now))));

        let mut bucket = bucket.lock().unwrap_or_else(PoisonError::into_inner);
        bucket.try_acquire(now, self.burst, self.refill_rate)
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> u64 {
        self.buckets.run_pending_tasks();
        self.buckets.entry_count()
    }
}

/// Reject clients that have exhausted their bucket with 429.
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let client = client_ip(&request);

    if limiter.allow(&client) {
        next.run(request).await
    } else {
        tracing::warn!(client = %client, path = %request.uri().path(), "Rate limit exceeded");
        metrics::record_rate_limited();
        (StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded").into_response()
    }
}
