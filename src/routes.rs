use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware::locale_redirect_middleware, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Locale-prefixed pages
        .route("/:locale", get(handlers::home))
        .route("/:locale/", get(handlers::home))
        .route("/:locale/blog", get(handlers::blog_index))
        .route("/:locale/blog/page/:page", get(handlers::blog_page))
        .route("/:locale/tags", get(handlers::locale_tags))
        .route("/:locale/tags/:tag", get(handlers::tag_index))
        .route("/:locale/tags/:tag/page/:page", get(handlers::tag_page))
        .route("/:locale/about", get(handlers::about))
        // Files and API, never locale-prefixed
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/robots.txt", get(handlers::robots))
        .route("/api/tag-data", get(handlers::tag_data))
        .route("/api/static-paths", get(handlers::static_paths))
        .fallback(handlers::fallback)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state,
            locale_redirect_middleware,
        ))
        .layer(TraceLayer::new_for_http())
}
