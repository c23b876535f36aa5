use crate::article::{ArticleView, Author};
use crate::error::ListingError;
use crate::listing::{self, HomeListing, StaticPaths, TagListing};
use crate::pagination::{parse_page_number, Page};
use crate::sitemap::{build_sitemap, render_sitemap_xml, robots_txt};
use crate::state::AppState;
use crate::tags::{slugify, TagCatalog, TagCount};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn home(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<HomeListing>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    Ok(Json(listing::home(&state.index, locale)))
}

pub async fn blog_index(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<Page<ArticleView>>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    Ok(Json(listing::blog_index(&state.index, locale)))
}

pub async fn blog_page(
    State(state): State<AppState>,
    Path((locale, page)): Path<(String, String)>,
) -> Result<Json<Page<ArticleView>>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    let page = parse_page_number(&page).map_err(not_found)?;

    listing::blog_page(&state.index, locale, page)
        .map(Json)
        .map_err(not_found)
}

pub async fn locale_tags(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<Vec<TagCount>>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    Ok(Json(listing::locale_tags(&state.index, locale)))
}

/// The router has already percent-decoded `tag`; it only needs slugifying.
pub async fn tag_index(
    State(state): State<AppState>,
    Path((locale, tag)): Path<(String, String)>,
) -> Result<Json<TagListing>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    Ok(Json(listing::tag_index(&state.index, locale, &slugify(&tag))))
}

pub async fn tag_page(
    State(state): State<AppState>,
    Path((locale, tag, page)): Path<(String, String, String)>,
) -> Result<Json<TagListing>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;
    let page = parse_page_number(&page).map_err(not_found)?;

    listing::tag_page(&state.index, locale, &slugify(&tag), page)
        .map(Json)
        .map_err(not_found)
}

pub async fn about(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Json<Author>, ApiError> {
    let locale = listing::parse_locale(&locale).map_err(not_found)?;

    match state.index.author(locale) {
        Ok(author) => Ok(Json(author.clone())),
        Err(e) => Err(internal_error("Author content unavailable", e)),
    }
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let today = chrono::Utc::now().date_naive();
    let entries = build_sitemap(&state.index, &state.config.site_url, today);

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap_xml(&entries),
    )
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.config.site_url),
    )
}

pub async fn tag_data(State(state): State<AppState>) -> Json<TagCatalog> {
    Json(TagCatalog::build(&state.index.all()))
}

pub async fn static_paths(State(state): State<AppState>) -> Json<StaticPaths> {
    Json(listing::enumerate_static_paths(&state.index))
}

pub async fn fallback() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            code: 404,
        }),
    )
}

fn not_found(err: ListingError) -> ApiError {
    tracing::debug!("Not found: {}", err);
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: err.to_string(),
            code: 404,
        }),
    )
}

fn internal_error(message: &str, err: impl std::fmt::Display) -> ApiError {
    tracing::error!("{}: {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: 500,
        }),
    )
}
