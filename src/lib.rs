//! Content indexing, pagination and locale routing for a bilingual blog.
//!
//! Articles come in as an immutable snapshot ([`article`]), are indexed and
//! resolved per locale ([`index`]), ordered ([`ordering`]), optionally
//! filtered by tag ([`tags`]) and paginated ([`pagination`]). [`listing`]
//! ties those together for each route and enumerates the static paths;
//! [`middleware`] negotiates a locale for unprefixed requests.

pub mod article;
pub mod config;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod index;
pub mod listing;
pub mod middleware;
pub mod ordering;
pub mod pagination;
pub mod routes;
pub mod sitemap;
pub mod state;
pub mod tags;
