//! Export binary - writes the build-time artifacts derived from the content snapshot
//!
//! Usage:
//!   cargo run --bin export
//!
//! Writes into EXPORT_DIR (defaults to public/):
//! - static-paths.json  every (locale[, tag], page) target to pre-generate
//! - tag-data.json      tag slug -> article counts, per locale
//! - sitemap.xml
//! - robots.txt
//!
//! Reads CONTENT_FILE, SITE_URL and the other variables documented on `Config`.

use anyhow::{Context, Result};
use chrono::Utc;
use locale_blog::{
    article, config,
    i18n::Locale,
    index::ContentIndex,
    listing::enumerate_static_paths,
    sitemap::{build_sitemap, render_sitemap_xml, robots_txt},
    tags::TagCatalog,
};
use std::fs;
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("export=info".parse()?),
        )
        .init();

    info!("Starting static export");

    let config = config::Config::from_env()?;
    let snapshot = article::load_snapshot(&config.content_file)?;
    let index = ContentIndex::from_snapshot(snapshot)?;

    // A build without the about page's author must fail, not ship a broken page
    for locale in Locale::all() {
        index.author(locale)?;
    }

    let out_dir = Path::new(&config.export_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let paths = enumerate_static_paths(&index);
    write(out_dir, "static-paths.json", &serde_json::to_string_pretty(&paths)?)?;
    info!(
        "✓ {} blog pages, {} tag listings, {} numbered tag pages",
        paths.blog_pages.len(),
        paths.tags.len(),
        paths.tag_pages.len()
    );

    let catalog = TagCatalog::build(&index.all());
    write(out_dir, "tag-data.json", &serde_json::to_string_pretty(&catalog)?)?;
    info!("✓ {} tags in catalog", catalog.tags.len());

    let entries = build_sitemap(&index, &config.site_url, Utc::now().date_naive());
    write(out_dir, "sitemap.xml", &render_sitemap_xml(&entries))?;
    write(out_dir, "robots.txt", &robots_txt(&config.site_url))?;
    info!("✓ {} sitemap entries", entries.len());

    info!("Export written to {}", out_dir.display());
    Ok(())
}

fn write(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
