//! Integration tests for the blog HTTP surface
//!
//! These tests build the full router (negotiation middleware included) over a
//! synthetic content snapshot and drive it with `oneshot` requests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use locale_blog::{
    article::{load_snapshot, parse_snapshot},
    config::Config,
    i18n::Locale,
    index::ContentIndex,
    listing::enumerate_static_paths,
    routes::create_router,
    state::AppState,
};

// ==================== Test Helpers ====================

fn test_config() -> Config {
    Config {
        port: 3000,
        bind_addr: "127.0.0.1".to_string(),
        content_file: "unused.json".to_string(),
        export_dir: "public".to_string(),
        site_url: "https://blog.example.com".to_string(),
        default_locale: Locale::VIETNAMESE,
    }
}

/// 12 English posts tagged "Rust" (every 4th pinned), 3 Vietnamese posts,
/// one draft, and a default author.
fn snapshot_json() -> String {
    let mut articles: Vec<Value> = (1..=12)
        .map(|day| {
            serde_json::json!({
                "slug": format!("en-post-{}", day),
                "title": format!("English post {}", day),
                "locale": "en",
                "date": format!("2024-03-{:02}", day),
                "tags": ["Rust", if day % 2 == 0 { "Web Dev" } else { "web-dev" }],
                "pinned": day % 4 == 0,
                "summary": "Summary"
            })
        })
        .collect();

    for day in 1..=3 {
        articles.push(serde_json::json!({
            "slug": format!("vi-post-{}", day),
            "title": format!("Bài viết {}", day),
            "locale": "vi",
            "date": format!("2024-04-{:02}", day),
            "tags": ["Lập Trình"]
        }));
    }

    articles.push(serde_json::json!({
        "slug": "unfinished",
        "title": "Draft",
        "locale": "en",
        "date": "2024-05-01",
        "tags": ["Secret"],
        "draft": true
    }));

    serde_json::json!({
        "articles": articles,
        "authors": [{"slug": "default", "name": "Xiro", "occupation": "Developer"}]
    })
    .to_string()
}

fn test_index() -> ContentIndex {
    let snapshot = parse_snapshot(&snapshot_json()).expect("snapshot parses");
    ContentIndex::from_snapshot(snapshot).expect("snapshot indexes")
}

fn test_app() -> Router {
    create_router(AppState::new(test_config(), test_index()))
}

async fn get(app: Router, uri: &str, accept_language: Option<&str>) -> (StatusCode, Option<String>, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(value) = accept_language {
        request = request.header(header::ACCEPT_LANGUAGE, value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");

    (status, location, String::from_utf8_lossy(&body).into_owned())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(test_app(), uri, None).await;
    let json = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, json)
}

fn item_slugs(json: &Value) -> Vec<String> {
    json["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["slug"].as_str().expect("slug").to_string())
        .collect()
}

// ==================== Negotiation Tests ====================

#[tokio::test]
async fn test_unprefixed_path_redirects_by_header() {
    let (status, location, _) = get(test_app(), "/blog", Some("fr-FR,en;q=0.5")).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/en/blog"));

    let (_, location, _) = get(test_app(), "/blog/page/2", Some("vi;q=0.9,en;q=0.8")).await;
    assert_eq!(location.as_deref(), Some("/vi/blog/page/2"));
}

#[tokio::test]
async fn test_missing_header_redirects_to_default_locale() {
    let (status, location, _) = get(test_app(), "/tags/rust", None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/vi/tags/rust"));
}

#[tokio::test]
async fn test_root_redirect_lands_on_home() {
    let (status, location, _) = get(test_app(), "/", Some("en")).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    let location = location.expect("location");

    let (status, _, _) = get(test_app(), &location, Some("en")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_prefixed_and_excluded_paths_pass_through() {
    let (status, location, _) = get(test_app(), "/en/blog", Some("vi")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());

    let (status, location, _) = get(test_app(), "/api/newsletter", Some("en")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(location.is_none());

    let (status, location, _) = get(test_app(), "/sitemap.xml", Some("en")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(location.is_none());
}

// ==================== Listing Tests ====================

#[tokio::test]
async fn test_blog_index_first_page() {
    let (status, json) = get_json("/en/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["currentPage"], 1);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(
        item_slugs(&json),
        vec!["en-post-12", "en-post-8", "en-post-4", "en-post-11", "en-post-10"]
    );
}

#[tokio::test]
async fn test_blog_numbered_pages() {
    let (status, json) = get_json("/en/blog/page/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_slugs(&json), vec!["en-post-2", "en-post-1"]);

    for bad in ["0", "-1", "4", "abc", "2abc"] {
        let (status, json) = get_json(&format!("/en/blog/page/{}", bad)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "page {bad}");
        assert_eq!(json["code"], 404);
    }
}

#[tokio::test]
async fn test_vietnamese_listing_has_own_content() {
    let (status, json) = get_json("/vi/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalPages"], 1);
    assert_eq!(item_slugs(&json), vec!["vi-post-3", "vi-post-2", "vi-post-1"]);
}

#[tokio::test]
async fn test_unknown_locale_segment_is_not_found() {
    let (status, _, _) = get(test_app(), "/fr/blog", Some("fr")).await;
    // "fr" is not a locale prefix, so the request is redirected first
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);

    let (status, _) = get_json("/vi/fr/blog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_listing() {
    let (status, json) = get_json("/en").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["featured"]["slug"], "en-post-12");
    assert_eq!(json["items"].as_array().expect("items").len(), 10);
    assert_eq!(json["hasMore"], true);
}

// ==================== Tag Tests ====================

#[tokio::test]
async fn test_tag_listing_merges_colliding_tags() {
    let (status, json) = get_json("/en/tags/web-dev").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tag"], "web-dev");
    assert_eq!(json["totalPages"], 2);
    // date order only: pinned posts do not jump ahead
    assert_eq!(item_slugs(&json)[0], "en-post-12");
    assert_eq!(item_slugs(&json)[1], "en-post-11");

    let (status, json) = get_json("/en/tags/Web%20Dev/page/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item_slugs(&json), vec!["en-post-2", "en-post-1"]);
}

#[tokio::test]
async fn test_unknown_tag_first_page_is_empty_second_is_not_found() {
    let (status, json) = get_json("/en/tags/haskell").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalPages"], 0);
    assert!(item_slugs(&json).is_empty());

    let (status, _) = get_json("/en/tags/haskell/page/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_encoded_non_ascii_tag() {
    let (status, json) = get_json("/vi/tags/l%E1%BA%ADp-tr%C3%ACnh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tag"], "lập-trình");
    assert_eq!(item_slugs(&json).len(), 3);
}

#[tokio::test]
async fn test_locale_tags_and_catalog() {
    let (status, json) = get_json("/en/tags").await;
    assert_eq!(status, StatusCode::OK);
    let tags: Vec<&str> = json
        .as_array()
        .expect("tag list")
        .iter()
        .map(|tag| tag["tag"].as_str().expect("tag"))
        .collect();
    assert!(tags.contains(&"rust"));
    assert!(!tags.contains(&"lập-trình"));
    assert!(!tags.contains(&"secret"));

    let (status, catalog) = get_json("/api/tag-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog["web-dev"]["count"], 12);
    assert_eq!(catalog["lập-trình"]["locales"]["vi"], 3);
    assert!(catalog.get("secret").is_none());
}

// ==================== Enumeration Agreement Tests ====================

#[tokio::test]
async fn test_every_static_path_is_served() {
    let paths = enumerate_static_paths(&test_index()).paths();
    assert!(!paths.is_empty());

    for path in paths {
        let (status, location, _) = get(test_app(), &path, None).await;
        assert_eq!(status, StatusCode::OK, "{path} should render");
        assert!(location.is_none(), "{path} should not redirect");
    }
}

#[tokio::test]
async fn test_static_paths_endpoint() {
    let (status, json) = get_json("/api/static-paths").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["locales"], serde_json::json!(["en", "vi"]));
    assert_eq!(json["blogPages"].as_array().expect("pages").len(), 4);
}

// ==================== Site Files Tests ====================

#[tokio::test]
async fn test_sitemap_and_robots() {
    let (status, _, body) = get(test_app(), "/sitemap.xml", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<loc>https://blog.example.com/en/blog/en-post-1</loc>"));
    assert!(body.contains("<loc>https://blog.example.com/vi/blog/vi-post-1</loc>"));
    assert!(!body.contains("unfinished"));

    let (status, _, body) = get(test_app(), "/robots.txt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: https://blog.example.com/sitemap.xml"));
}

#[tokio::test]
async fn test_about_page() {
    let (status, json) = get_json("/en/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Xiro");
}

#[tokio::test]
async fn test_about_without_author_fails_loudly() {
    let snapshot = parse_snapshot(r#"{"articles": [], "authors": []}"#).expect("parses");
    let index = ContentIndex::from_snapshot(snapshot).expect("indexes");
    let app = create_router(AppState::new(test_config(), index));

    let (status, _, _) = get(app, "/vi/about", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ==================== Snapshot Loading Tests ====================

#[test]
fn test_snapshot_file_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("snapshot.json");
    std::fs::write(&path, snapshot_json()).expect("Failed to write snapshot");

    let index = ContentIndex::from_snapshot(load_snapshot(&path).expect("loads")).expect("indexes");
    assert_eq!(index.len(), 15);
    assert_eq!(index.draft_count(), 1);
}
