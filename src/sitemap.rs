//! Sitemap and robots.txt.
//!
//! Article URLs come from [`ContentIndex::all`], so the sitemap uses the same
//! draft filter as every listing.

use crate::i18n::Locale;
use crate::index::ContentIndex;
use chrono::NaiveDate;
use serde::Serialize;

/// Locale-relative routes that exist for every locale.
const STATIC_ROUTES: [&str; 4] = ["", "blog", "tags", "about"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
}

/// One entry per locale route plus one per published article.
///
/// `generated_on` stamps the static routes; articles carry their own
/// last-modified date.
pub fn build_sitemap(index: &ContentIndex, site_url: &str, generated_on: NaiveDate) -> Vec<SitemapEntry> {
    let site_url = site_url.trim_end_matches('/');
    let stamp = generated_on.format("%Y-%m-%d").to_string();

    let mut entries: Vec<SitemapEntry> = Locale::all()
        .into_iter()
        .flat_map(|locale| {
            STATIC_ROUTES.iter().map(move |route| {
                if route.is_empty() {
                    format!("{}/{}", site_url, locale)
                } else {
                    format!("{}/{}/{}", site_url, locale, route)
                }
            })
        })
        .map(|url| SitemapEntry {
            url,
            last_modified: stamp.clone(),
        })
        .collect();

    entries.extend(index.all().into_iter().map(|article| SitemapEntry {
        url: format!("{}/{}", site_url, article.path()),
        last_modified: article.last_modified.format("%Y-%m-%d").to_string(),
    }));

    entries
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
            escape_xml(&entry.url),
            escape_xml(&entry.last_modified)
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(site_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    format!(
        "User-agent: *\nAllow: /\n\nHost: {site_url}\nSitemap: {site_url}/sitemap.xml\n"
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
