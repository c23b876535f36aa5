//! Locale negotiation for unprefixed page requests.
//!
//! Runs before routing. API routes, framework-internal paths and anything
//! that looks like a file pass through untouched; paths that already start
//! with a supported locale pass through too. Everything else is redirected
//! to `/<locale><path>`, with the locale taken from Accept-Language on every
//! request (no cookie, no stored preference).

use crate::i18n::{negotiate, Locale};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::ACCEPT_LANGUAGE,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// First path segments that are never locale-prefixed.
pub const EXCLUDED_SEGMENTS: &[&str] = &["api", "_next"];

static FILE_EXTENSION_REGEX: OnceLock<Regex> = OnceLock::new();

/// What the negotiation step decided for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Not a page path; continue unchanged.
    ExcludedPath,
    /// First segment is already a supported locale; continue unchanged.
    AlreadyPrefixed,
    /// Redirect to `location`, which starts with `/<locale>`.
    NeedsRedirect { locale: Locale, location: String },
}

/// Whether `path` is outside the set of negotiated page paths.
pub fn is_excluded(path: &str) -> bool {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if EXCLUDED_SEGMENTS.contains(&first) {
        return true;
    }

    let regex = FILE_EXTENSION_REGEX.get_or_init(|| Regex::new(r"\.[^/]+$").unwrap());
    regex.is_match(path)
}

/// Decide how to handle a request for `path`.
pub fn classify(
    path: &str,
    query: Option<&str>,
    accept_language: Option<&str>,
    default_locale: Locale,
) -> RouteDecision {
    if is_excluded(path) {
        return RouteDecision::ExcludedPath;
    }

    let first_segment = path.split('/').find(|segment| !segment.is_empty());
    if first_segment.and_then(Locale::from_code).is_some() {
        return RouteDecision::AlreadyPrefixed;
    }

    let locale = negotiate(accept_language, default_locale);
    let mut location = if path.starts_with('/') {
        format!("/{}{}", locale, path)
    } else {
        format!("/{}/{}", locale, path)
    };
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        location.push('?');
        location.push_str(query);
    }

    RouteDecision::NeedsRedirect { locale, location }
}

/// Axum middleware applying [`classify`] to every request.
pub async fn locale_redirect_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let decision = classify(
        request.uri().path(),
        request.uri().query(),
        accept_language,
        state.config.default_locale,
    );

    match decision {
        RouteDecision::ExcludedPath | RouteDecision::AlreadyPrefixed => next.run(request).await,
        RouteDecision::NeedsRedirect { locale, location } => {
            debug!(
                "Redirecting {} to {} (negotiated {} from {:?})",
                request.uri().path(),
                location,
                locale,
                accept_language
            );
            Redirect::temporary(&location).into_response()
        }
    }
}
