//! Tag Index: tag slug normalization, tag filtering and the tag catalog.
//!
//! The same [`slugify`] runs when an article enters the index, when the
//! catalog is built and when a tag segment arrives in a URL, so the three can
//! never disagree about which bucket a tag belongs to. Raw tags that collide
//! on one slug are merged (union): the article lands in that bucket once.

use crate::article::Article;
use crate::i18n::Locale;
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalize a free-text tag into a URL-safe slug.
///
/// Lowercases, keeps alphanumeric characters (including non-ASCII letters),
/// and collapses every run of whitespace, punctuation, `-` or `_` into a
/// single `-`. Leading and trailing separators are dropped.
pub fn slugify(tag: &str) -> String {
    let mut slug = String::with_capacity(tag.len());
    let mut pending_separator = false;

    for ch in tag.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Percent-encode a tag slug for use as a URL path segment.
pub fn encode_tag_segment(tag_slug: &str) -> String {
    urlencoding::encode(tag_slug).into_owned()
}

/// Turn an incoming URL tag segment back into a tag slug.
///
/// The segment is percent-decoded (if it is not valid percent-encoding the
/// raw text is used) and then slugified, so `Web%20Dev`, `web-dev` and the
/// catalog's encoded form all land in the same bucket.
pub fn decode_tag_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => slugify(&decoded),
        Err(_) => slugify(segment),
    }
}

/// Articles carrying `tag_slug`, in input order.
pub fn by_tag<'a>(articles: &[&'a Article], tag_slug: &str) -> Vec<&'a Article> {
    articles
        .iter()
        .copied()
        .filter(|article| article.has_tag(tag_slug))
        .collect()
}

/// A tag slug and how many articles of a set carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Tag counts over an article set, most used first, ties by slug.
pub fn tag_counts(articles: &[&Article]) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in articles {
        for slug in &article.tag_slugs {
            *counts.entry(slug.as_str()).or_default() += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count));
    tags
}

/// One catalog entry: total count plus the per-locale breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub count: usize,
    pub locales: BTreeMap<Locale, usize>,
}

/// Every known tag slug mapped to its article counts (`tag-data.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagCatalog {
    pub tags: BTreeMap<String, TagEntry>,
}

impl TagCatalog {
    /// Build the catalog from a (draft-free) article set.
    pub fn build(articles: &[&Article]) -> Self {
        let mut tags: BTreeMap<String, TagEntry> = BTreeMap::new();
        for article in articles {
            for slug in &article.tag_slugs {
                let entry = tags.entry(slug.clone()).or_default();
                entry.count += 1;
                *entry.locales.entry(article.locale).or_default() += 1;
            }
        }
        Self { tags }
    }

    pub fn count(&self, tag_slug: &str) -> usize {
        self.tags.get(tag_slug).map(|entry| entry.count).unwrap_or(0)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }
}
