//! Landing page and feedback intake.

use axum::{
    body::{self, Body},
    extract::State,
    http::{header, Request},
    response::{Html, Redirect},
};

use crate::feedback::{validate_feedback_with_limit, FeedbackEntry};
use crate::http::request::client_ip;
use crate::http::response::{render, AppError};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::security::csrf;
use crate::templates::PageKey;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state.templates, PageKey::Home, &state.fixtures.home(false))
}

/// `GET /feedback` has nothing to show.
pub async fn feedback_redirect() -> Redirect {
    Redirect::to("/")
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Html<String>, AppError> {
    let client = client_ip(&request);

    let content_type_ok = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map_or(true, |v| v.starts_with(FORM_CONTENT_TYPE));
    if !content_type_ok {
        metrics::record_feedback("invalid_form");
        return Err(AppError::BadRequest("Invalid form data"));
    }

    let bytes = body::to_bytes(request.into_body(), state.config.security.max_body_size)
        .await
        .map_err(|_| AppError::BadRequest("Invalid form data"))?;
    let form = FeedbackForm::parse(&bytes).ok_or_else(|| {
        metrics::record_feedback("invalid_form");
        AppError::BadRequest("Invalid form data")
    })?;

    if form.csrf_token.is_empty() {
        metrics::record_feedback("missing_csrf");
        return Err(AppError::BadRequest("Missing CSRF token"));
    }
    if !csrf::is_well_formed(&form.csrf_token) {
        metrics::record_feedback("invalid_csrf");
        return Err(AppError::BadRequest("Invalid CSRF token"));
    }

    if form.is_bot() {
        tracing::warn!(client = %client, "Bot detected: honeypot fields filled");
        metrics::record_feedback("honeypot");
        return Err(AppError::BadRequest("Invalid request"));
    }

    let text = validate_feedback_with_limit(&form.feedback, state.config.feedback.max_length)
        .ok_or_else(|| {
            metrics::record_feedback("invalid_content");
            AppError::BadRequest("Invalid feedback content")
        })?;

    let entry = FeedbackEntry::new(text, &form.personas);
    state.feedback.append(&entry).await?;

    tracing::info!(
        client = %client,
        personas = %entry.persona_list(),
        length = entry.text.chars().count(),
        "Feedback received"
    );
    metrics::record_feedback("accepted");

    render(&state.templates, PageKey::Home, &state.fixtures.home(true))
}

/// Decoded `POST /feedback` body.
#[derive(Debug, Default, PartialEq)]
struct FeedbackForm {
    feedback: String,
    personas: Vec<String>,
    csrf_token: String,
    website: String,
    email_address: String,
}

impl FeedbackForm {
    /// Single-valued fields keep their first occurrence; `persona` and
    /// `persona[]` accumulate. `None` if the body is not UTF-8.
    fn parse(body: &[u8]) -> Option<Self> {
        std::str::from_utf8(body).ok()?;

        let mut form = FeedbackForm::default();
        let mut seen = [false; 4];

        for (key, value) in url::form_urlencoded::parse(body) {
            let (index, field) = match key.as_ref() {
                "persona" | "persona[]" => {
                    form.personas.push(value.into_owned());
                    continue;
                }
                "feedback" => (0, &mut form.feedback),
                "csrf_token" => (1, &mut form.csrf_token),
                "website" => (2, &mut form.website),
                "email_address" => (3, &mut form.email_address),
                _ => continue,
            };
            if !seen[index] {
                seen[index] = true;
                *field = value.into_owned();
            }
        }

        Some(form)
    }

    fn is_bot(&self) -> bool {
        !self.website.is_empty() || !self.email_address.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_personas() {
        let form = FeedbackForm::parse(
            b"feedback=Hello+there&persona=maker&persona%5B%5D=organiser&csrf_token=abc",
        )
        .unwrap();
        assert_eq!(form.feedback, "Hello there");
        assert_eq!(form.personas, vec!["maker", "organiser"]);
        assert_eq!(form.csrf_token, "abc");
        assert!(!form.is_bot());
    }

    #[test]
    fn test_first_value_wins() {
        let form = FeedbackForm::parse(b"feedback=one&feedback=two").unwrap();
        assert_eq!(form.feedback, "one");
    }

    #[test]
    fn test_honeypots() {
        assert!(FeedbackForm::parse(b"website=spam.example").unwrap().is_bot());
        assert!(FeedbackForm::parse(b"email_address=a%40b.c").unwrap().is_bot());
        assert!(!FeedbackForm::parse(b"website=&email_address=").unwrap().is_bot());
    }

    #[test]
    fn test_non_utf8_rejected() {
        assert_eq!(FeedbackForm::parse(&[0x66, 0x3d, 0xff, 0xfe]), None);
    }
}
