//! Article and author records as handed over by the content loader.
//!
//! The loader's JSON is deserialized into `Raw*` records and then normalized
//! exactly once: optional fields get their defaults, tags get their slugs and
//! the locale is validated against the registry. Everything downstream only
//! ever sees the normalized [`Article`].

use crate::error::ContentError;
use crate::i18n::Locale;
use crate::tags::slugify;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Article as it appears in the content snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    pub slug: String,
    pub title: String,
    pub locale: String,
    pub date: String,
    #[serde(default)]
    pub lastmod: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub pinned: Option<bool>,
    #[serde(default)]
    pub draft: Option<bool>,
}

/// Author record as it appears in the content snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAuthor {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// The whole snapshot file: `{ "articles": [...], "authors": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    #[serde(default)]
    pub authors: Vec<RawAuthor>,
}

/// A fully-populated article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub locale: Locale,
    pub date: DateTime<Utc>,
    /// Equal to `date` when the source record has no `lastmod`.
    pub last_modified: DateTime<Utc>,
    pub summary: Option<String>,
    /// Free-text labels, as written by the author.
    pub tags: Vec<String>,
    /// Normalized tag slugs, deduplicated, in first-seen order.
    pub tag_slugs: Vec<String>,
    pub pinned: bool,
    pub draft: bool,
}

impl Article {
    /// Normalize a raw record.
    pub fn from_raw(raw: RawArticle) -> Result<Self, ContentError> {
        let locale =
            Locale::from_code(&raw.locale).ok_or_else(|| ContentError::UnsupportedLocale {
                slug: raw.slug.clone(),
                locale: raw.locale.clone(),
            })?;

        let date = parse_date(&raw.slug, &raw.date)?;
        let last_modified = match raw.lastmod.as_deref() {
            Some(value) => parse_date(&raw.slug, value)?,
            None => date,
        };

        let mut tag_slugs: Vec<String> = Vec::with_capacity(raw.tags.len());
        for tag in &raw.tags {
            let slug = slugify(tag);
            if !slug.is_empty() && !tag_slugs.contains(&slug) {
                tag_slugs.push(slug);
            }
        }

        Ok(Self {
            slug: raw.slug,
            title: raw.title,
            locale,
            date,
            last_modified,
            summary: raw.summary,
            tags: raw.tags,
            tag_slugs,
            pinned: raw.pinned.unwrap_or(false),
            draft: raw.draft.unwrap_or(false),
        })
    }

    /// Whether any of this article's tags normalizes to `tag_slug`.
    pub fn has_tag(&self, tag_slug: &str) -> bool {
        self.tag_slugs.iter().any(|slug| slug == tag_slug)
    }

    /// Site-relative path of the article page, without a leading slash.
    pub fn path(&self) -> String {
        format!("{}/blog/{}", self.locale, self.slug)
    }

    pub fn view(&self) -> ArticleView {
        ArticleView {
            slug: self.slug.clone(),
            title: self.title.clone(),
            locale: self.locale,
            date: self.date,
            summary: self.summary.clone(),
            tags: self.tags.clone(),
            pinned: self.pinned,
            path: self.path(),
        }
    }
}

/// Read-only projection handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub locale: Locale,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub pinned: bool,
    pub path: String,
}

/// Author record used by the about page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Author {
    pub fn from_raw(raw: RawAuthor) -> Result<Self, ContentError> {
        let locale = match raw.locale.as_deref() {
            Some(code) => Some(Locale::from_code(code).ok_or_else(|| {
                ContentError::UnsupportedLocale {
                    slug: raw.slug.clone(),
                    locale: code.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            slug: raw.slug,
            name: raw.name,
            locale,
            occupation: raw.occupation,
            avatar: raw.avatar,
            summary: raw.summary,
        })
    }
}

/// Parse a snapshot from its JSON text.
pub fn parse_snapshot(json: &str) -> Result<RawSnapshot, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a snapshot file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<RawSnapshot, ContentError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&json)
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(slug: &str, value: &str) -> Result<DateTime<Utc>, ContentError> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ContentError::InvalidDate {
            slug: slug.to_string(),
            value: value.to_string(),
        })
}
