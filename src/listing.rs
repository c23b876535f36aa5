//! Listing routes and their static enumeration.
//!
//! Each listing is defined by three things: the resolved article set, its
//! order and its page size. Live requests and static enumeration share the
//! private `*_articles` helpers below, so a page that enumeration emits is
//! always a page the live route accepts.

use crate::article::{Article, ArticleView};
use crate::error::ListingError;
use crate::i18n::Locale;
use crate::index::ContentIndex;
use crate::ordering::{sort_by_date, sort_pinned_then_date};
use crate::pagination::{
    first_page, page_numbers, paginate, Page, BLOG_POSTS_PER_PAGE, HOME_MAX_DISPLAY,
    TAG_POSTS_PER_PAGE,
};
use crate::tags::{by_tag, decode_tag_segment, encode_tag_segment, tag_counts, TagCount};
use serde::Serialize;

/// Parse the locale segment of a URL. Only exact registry codes are accepted.
pub fn parse_locale(segment: &str) -> Result<Locale, ListingError> {
    Locale::from_code(segment).ok_or_else(|| ListingError::UnknownLocale(segment.to_string()))
}

fn index_articles(index: &ContentIndex, locale: Locale) -> Vec<&Article> {
    let mut articles = index.resolve(locale);
    sort_pinned_then_date(&mut articles);
    articles
}

fn tag_articles<'a>(index: &'a ContentIndex, locale: Locale, tag_slug: &str) -> Vec<&'a Article> {
    let mut articles = by_tag(&index.resolve(locale), tag_slug);
    sort_by_date(&mut articles);
    articles
}

// ==================== Live listings ====================

/// Home page data: the newest articles, with the first one featured.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeListing {
    pub featured: Option<ArticleView>,
    pub items: Vec<ArticleView>,
    pub has_more: bool,
}

pub fn home(index: &ContentIndex, locale: Locale) -> HomeListing {
    let articles = index_articles(index, locale);
    let items: Vec<ArticleView> = articles
        .iter()
        .take(HOME_MAX_DISPLAY)
        .map(|article| article.view())
        .collect();

    HomeListing {
        featured: items.first().cloned(),
        has_more: articles.len() > HOME_MAX_DISPLAY,
        items,
    }
}

/// `/:locale/blog`
pub fn blog_index(index: &ContentIndex, locale: Locale) -> Page<ArticleView> {
    first_page(&index_articles(index, locale), BLOG_POSTS_PER_PAGE).map(Article::view)
}

/// `/:locale/blog/page/:page`
pub fn blog_page(
    index: &ContentIndex,
    locale: Locale,
    page: i64,
) -> Result<Page<ArticleView>, ListingError> {
    Ok(paginate(&index_articles(index, locale), BLOG_POSTS_PER_PAGE, page)?.map(Article::view))
}

/// A tag listing page together with its heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagListing {
    pub tag: String,
    pub title: String,
    #[serde(flatten)]
    pub page: Page<ArticleView>,
}

impl TagListing {
    fn new(tag_slug: &str, page: Page<ArticleView>) -> Self {
        Self {
            tag: tag_slug.to_string(),
            title: tag_title(tag_slug),
            page,
        }
    }
}

/// Heading for a tag page: the slug with its first letter uppercased.
fn tag_title(tag_slug: &str) -> String {
    let mut chars = tag_slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `/:locale/tags/:tag`. An unknown tag is an empty listing, not an error.
pub fn tag_index(index: &ContentIndex, locale: Locale, tag_slug: &str) -> TagListing {
    let page = first_page(&tag_articles(index, locale, tag_slug), TAG_POSTS_PER_PAGE);
    TagListing::new(tag_slug, page.map(Article::view))
}

/// `/:locale/tags/:tag/page/:page`
pub fn tag_page(
    index: &ContentIndex,
    locale: Locale,
    tag_slug: &str,
    page: i64,
) -> Result<TagListing, ListingError> {
    let page = paginate(&tag_articles(index, locale, tag_slug), TAG_POSTS_PER_PAGE, page)?;
    Ok(TagListing::new(tag_slug, page.map(Article::view)))
}

/// `/:locale/tags`: tags used by the locale's resolved article set.
pub fn locale_tags(index: &ContentIndex, locale: Locale) -> Vec<TagCount> {
    tag_counts(&index.resolve(locale))
}

// ==================== Static enumeration ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParam {
    pub locale: Locale,
    pub page: usize,
}

impl PageParam {
    pub fn path(&self) -> String {
        format!("/{}/blog/page/{}", self.locale, self.page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagParam {
    pub locale: Locale,
    /// Percent-encoded tag slug, ready for use as a path segment.
    pub tag: String,
}

impl TagParam {
    pub fn path(&self) -> String {
        format!("/{}/tags/{}", self.locale, self.tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPageParam {
    pub locale: Locale,
    /// Percent-encoded tag slug, ready for use as a path segment.
    pub tag: String,
    pub page: usize,
}

impl TagPageParam {
    pub fn path(&self) -> String {
        format!("/{}/tags/{}/page/{}", self.locale, self.tag, self.page)
    }
}

/// Every numbered blog page of `locale`.
pub fn enumerate_pages(index: &ContentIndex, locale: Locale) -> Vec<PageParam> {
    page_numbers(index_articles(index, locale).len(), BLOG_POSTS_PER_PAGE)
        .map(|page| PageParam { locale, page })
        .collect()
}

/// Every tag with at least one article in `locale`'s resolved set.
pub fn enumerate_tags(index: &ContentIndex, locale: Locale) -> Vec<TagParam> {
    let mut tags: Vec<String> = locale_tags(index, locale)
        .into_iter()
        .map(|count| count.tag)
        .collect();
    tags.sort();

    tags.into_iter()
        .map(|tag| TagParam {
            locale,
            tag: encode_tag_segment(&tag),
        })
        .collect()
}

/// Every numbered page of one tag listing in `locale`.
pub fn enumerate_tag_pages(index: &ContentIndex, locale: Locale, tag_slug: &str) -> Vec<TagPageParam> {
    let tag = encode_tag_segment(tag_slug);
    page_numbers(tag_articles(index, locale, tag_slug).len(), TAG_POSTS_PER_PAGE)
        .map(|page| TagPageParam {
            locale,
            tag: tag.clone(),
            page,
        })
        .collect()
}

/// Every statically generated listing target, across all locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticPaths {
    pub locales: Vec<Locale>,
    pub blog_pages: Vec<PageParam>,
    pub tags: Vec<TagParam>,
    pub tag_pages: Vec<TagPageParam>,
}

impl StaticPaths {
    /// All paths as URL strings, locale roots first.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for locale in &self.locales {
            paths.push(format!("/{}", locale));
            paths.push(format!("/{}/blog", locale));
            paths.push(format!("/{}/tags", locale));
            paths.push(format!("/{}/about", locale));
        }
        paths.extend(self.blog_pages.iter().map(PageParam::path));
        paths.extend(self.tags.iter().map(TagParam::path));
        paths.extend(self.tag_pages.iter().map(TagPageParam::path));
        paths
    }
}

pub fn enumerate_static_paths(index: &ContentIndex) -> StaticPaths {
    let locales = Locale::all();
    let mut blog_pages = Vec::new();
    let mut tags = Vec::new();
    let mut tag_pages = Vec::new();

    for &locale in &locales {
        blog_pages.extend(enumerate_pages(index, locale));

        let locale_tags = enumerate_tags(index, locale);
        for tag in &locale_tags {
            let tag_slug = decode_tag_segment(&tag.tag);
            tag_pages.extend(enumerate_tag_pages(index, locale, &tag_slug));
        }
        tags.extend(locale_tags);
    }

    StaticPaths {
        locales,
        blog_pages,
        tags,
        tag_pages,
    }
}
