//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with every page, form and asset route
//! - Wire up middleware (request ID, tracing, timeout, body limit,
//!   security headers, rate limiting, metrics)
//! - Bind to the listener and serve until shutdown

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::feedback::FeedbackStore;
use crate::handlers::{assets, home, pages};
use crate::http::request::{request_id, RequestUuid};
use crate::mock::FixtureStore;
use crate::observability::metrics;
use crate::security::{headers, rate_limit::rate_limit_middleware, RateLimiter};
use crate::templates::TemplateManager;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub templates: Arc<TemplateManager>,
    pub fixtures: Arc<FixtureStore>,
    pub feedback: Arc<FeedbackStore>,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Assemble state from already-initialised parts.
    pub fn new(config: SiteConfig, templates: TemplateManager, fixtures: FixtureStore) -> Self {
        let feedback = FeedbackStore::new(&config.feedback.path);
        let limiter = RateLimiter::new(&config.rate_limit);
        Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            fixtures: Arc::new(fixtures),
            feedback: Arc::new(feedback),
            limiter: Arc::new(limiter),
        }
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(state: AppState) -> Self {
        Self {
            router: build_router(state),
        }
    }

    /// Run the server, accepting connections on the given listener, until
    /// the shutdown signal fires. In-flight requests are drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
///
/// Layer order, outermost first: request ID → trace → propagate ID →
/// timeout → body limit → metrics → security headers → rate limit → routes.
/// Headers sit outside the limiter so 429 responses carry them too.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    let limiter = state.limiter.clone();

    let mut router = Router::new()
        .route("/", get(home::home))
        .route(
            "/feedback",
            get(home::feedback_redirect).post(home::submit_feedback),
        )
        .route("/dashboard", get(pages::dashboard))
        .route("/circles", get(pages::circles))
        .route("/chat", get(pages::chat))
        .route("/gather", get(pages::gather))
        .route("/marketplace", get(pages::marketplace))
        .route("/profile", get(pages::own_profile))
        .route("/profile/{handle}", get(pages::public_profile))
        .route("/static/css/style.css", get(assets::stylesheet))
        .route("/static/js/htmx.min.js", get(assets::htmx))
        .route("/static/js/sw.js", get(assets::service_worker))
        .route("/sw.js", get(assets::service_worker))
        .route("/manifest.json", get(assets::manifest))
        .route("/static/img/{*path}", get(assets::image))
        .fallback(home::not_found)
        .with_state(state);

    if config.rate_limit.enabled {
        router = router.layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
    }
    if config.security.enable_headers {
        router = headers::apply(router);
    }

    router
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.timeouts.request_secs),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
                request_id = %request_id(request),
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(RequestUuid))
}
