//! Content Index and Locale Resolver.
//!
//! The index owns the immutable article snapshot. Drafts are dropped when the
//! index is built, so every view handed out here is already public. All page
//! producing code goes through [`ContentIndex::resolve`] to pick its article
//! set; nothing else re-implements the locale fallback.

use crate::article::{Article, Author, RawSnapshot};
use crate::error::ContentError;
use crate::i18n::Locale;
use std::collections::HashSet;
use tracing::{debug, info};

/// Slug of the author record the about page requires.
pub const DEFAULT_AUTHOR_SLUG: &str = "default";

#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    /// Published (non-draft) articles, in snapshot order.
    articles: Vec<Article>,
    authors: Vec<Author>,
    draft_count: usize,
}

impl ContentIndex {
    /// Build an index from normalized records.
    ///
    /// Fails if two records (drafts included) share a slug.
    pub fn new(articles: Vec<Article>, authors: Vec<Author>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(articles.len());
        for article in &articles {
            if !seen.insert(article.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(article.slug.clone()));
            }
        }

        let total = articles.len();
        let articles: Vec<Article> = articles.into_iter().filter(|a| !a.draft).collect();
        let draft_count = total - articles.len();

        Ok(Self {
            articles,
            authors,
            draft_count,
        })
    }

    /// Normalize a raw snapshot and index it.
    pub fn from_snapshot(snapshot: RawSnapshot) -> Result<Self, ContentError> {
        let articles = snapshot
            .articles
            .into_iter()
            .map(Article::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        let authors = snapshot
            .authors
            .into_iter()
            .map(Author::from_raw)
            .collect::<Result<Vec<_>, _>>()?;

        let index = Self::new(articles, authors)?;
        info!(
            "Indexed {} published articles ({} drafts skipped), {} authors",
            index.articles.len(),
            index.draft_count,
            index.authors.len()
        );
        Ok(index)
    }

    /// Every published article, in snapshot order.
    pub fn all(&self) -> Vec<&Article> {
        self.articles.iter().collect()
    }

    /// Published articles written in `locale`, in snapshot order.
    pub fn by_locale(&self, locale: Locale) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.locale == locale)
            .collect()
    }

    /// The article set a page for `locale` is built from.
    ///
    /// A locale with its own content gets exactly that content; a locale with
    /// none falls back to the whole corpus instead of an empty site.
    pub fn resolve(&self, locale: Locale) -> Vec<&Article> {
        let native = self.by_locale(locale);
        if native.is_empty() {
            debug!("No {} articles, falling back to all {}", locale, self.articles.len());
            self.all()
        } else {
            native
        }
    }

    /// Whether `resolve(locale)` returns native content rather than the fallback.
    pub fn has_native_content(&self, locale: Locale) -> bool {
        self.articles.iter().any(|article| article.locale == locale)
    }

    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }

    /// The author record shown on the about page.
    ///
    /// Tries the default author written for `locale`, then one without a
    /// locale, then a default author in any locale. Having none at all is a
    /// content error: there is no sensible page to render without it.
    pub fn author(&self, locale: Locale) -> Result<&Author, ContentError> {
        let defaults = || {
            self.authors
                .iter()
                .filter(|author| author.slug == DEFAULT_AUTHOR_SLUG)
        };

        defaults()
            .find(|author| author.locale == Some(locale))
            .or_else(|| defaults().find(|author| author.locale.is_none()))
            .or_else(|| defaults().next())
            .ok_or_else(|| ContentError::MissingAuthor {
                locale: locale.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn draft_count(&self) -> usize {
        self.draft_count
    }
}
