use super::*;
use crate::catalog::{Category, PagerConfig, WindowConfig};

fn sample_db() -> LinkDb {
    LinkDb::new(
        vec![Category {
            id: "rust".to_string(),
            label: "Rust".to_string(),
        }],
        vec![
            LinkRecord::new("The Book", "https://doc.rust-lang.org/book/")
                .with_description("Official guide")
                .with_categories(["rust", "reading"]),
            LinkRecord::new("Untagged", "https://example.com"),
        ],
    )
}

// ========================================
// card_row / category_labels
// ========================================

#[test]
fn test_card_row_uses_labels_and_falls_back_to_ids() {
    let db = sample_db();
    let row = card_row(&db, &db.links[0]);
    assert_eq!(
        row,
        vec![
            "The Book".to_string(),
            "https://doc.rust-lang.org/book/".to_string(),
            "Official guide".to_string(),
            "Rust, reading".to_string(),
        ]
    );
}

#[test]
fn test_card_row_without_description_or_categories() {
    let db = sample_db();
    let row = card_row(&db, &db.links[1]);
    assert_eq!(row[2], "");
    assert_eq!(row[3], "");
}

// ========================================
// empty_message
// ========================================

#[test]
fn test_empty_message_no_links() {
    let v = catalog::view(
        &[],
        &QueryState::default(),
        PagerConfig::default(),
        &WindowConfig::default(),
    );
    assert_eq!(empty_message(&v), "No links available");
}

#[test]
fn test_empty_message_no_match() {
    let db = sample_db();
    let state = QueryState::new(CategoryFilter::All, "zzz", 1);
    let v = catalog::view(
        &db.links,
        &state,
        PagerConfig::default(),
        &WindowConfig::default(),
    );
    assert_eq!(empty_message(&v), "No links matched");
}

// ========================================
// JSON output shape
// ========================================

#[test]
fn test_list_output_json_shape() {
    let db = sample_db();
    let config = CatalogConfig::default();
    let state = QueryState::new(CategoryFilter::parse("rust"), "", 3);
    let v = catalog::view(&db.links, &state, config.pager(), &config.window);

    let output = ListOutput {
        title: &config.title,
        query: &state,
        view: &v,
        at_first: v.page.at_first(),
        at_last: v.page.at_last(),
    };
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["title"], "Rabbit Hole");
    assert_eq!(json["query"]["category"], "rust");
    assert_eq!(json["query"]["page"], 3);
    assert_eq!(json["page"], 1);
    assert_eq!(json["total_matched"], 1);
    assert_eq!(json["total_all"], 2);
    assert_eq!(json["at_first"], true);
    assert_eq!(json["at_last"], true);
    assert_eq!(json["items"][0]["title"], "The Book");
}
