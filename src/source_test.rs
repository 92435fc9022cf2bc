use super::*;
use crate::error::CatalogError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_links(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ========================================
// parse_source
// ========================================

#[test]
fn test_parse_https_url() {
    let source = parse_source("https://example.com/links.json", &HttpConfig::default());
    assert_eq!(source.describe(), "https://example.com/links.json");
}

#[test]
fn test_parse_http_url_case_insensitive() {
    assert!(is_url("HTTP://example.com/links.json"));
}

#[test]
fn test_parse_relative_path() {
    let source = parse_source(" assets/json/links.json ", &HttpConfig::default());
    assert_eq!(source.describe(), "assets/json/links.json");
    assert!(!is_url("assets/json/links.json"));
}

#[test]
fn test_file_url_is_a_path() {
    assert!(!is_url("file:///tmp/links.json"));
}

// ========================================
// parse_links
// ========================================

#[test]
fn test_parse_links_document() {
    let db = parse_links(br#"{"links": [{"title": "a", "url": "u"}]}"#).unwrap();
    assert_eq!(db.links.len(), 1);
}

#[test]
fn test_parse_links_invalid_json() {
    let result = parse_links(b"{not json");
    assert!(matches!(result, Err(CatalogError::Json(_))));
}

// ========================================
// FileSource
// ========================================

#[tokio::test]
async fn test_file_source_loads_links() {
    let file = write_links(
        r#"{
            "categories": [{"id": "rust", "label": "Rust"}],
            "links": [{"title": "The Book", "url": "https://doc.rust-lang.org/book/", "categories": ["rust"]}]
        }"#,
    );

    let source = parse_source(file.path().to_str().unwrap(), &HttpConfig::default());
    let db = source.load().await.unwrap();

    assert_eq!(db.categories.len(), 1);
    assert_eq!(db.links[0].title, "The Book");
}

#[tokio::test]
async fn test_file_source_missing_file() {
    let source = FileSource::new("/nonexistent/links.json");
    let result = source.load().await;
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[tokio::test]
async fn test_file_source_empty_object() {
    let file = write_links("{}");
    let db = FileSource::new(file.path()).load().await.unwrap();
    assert!(db.links.is_empty());
    assert!(db.categories.is_empty());
}
