use super::*;

fn link(title: &str, description: Option<&str>, categories: &[&str]) -> LinkRecord {
    let mut l = LinkRecord::new(title, "https://example.com").with_categories(categories.to_vec());
    l.description = description.map(|d| d.to_string());
    l
}

// ========================================
// matches_category
// ========================================

#[test]
fn all_matches_every_link() {
    let tagged = link("a", None, &["rust"]);
    let untagged = link("b", None, &[]);
    assert!(matches_category(&tagged, &CategoryFilter::All));
    assert!(matches_category(&untagged, &CategoryFilter::All));
}

#[test]
fn specific_category_requires_membership() {
    let l = link("a", None, &["rust", "web"]);
    assert!(matches_category(&l, &CategoryFilter::parse("web")));
    assert!(!matches_category(&l, &CategoryFilter::parse("games")));
}

#[test]
fn untagged_link_only_matches_all() {
    let l = link("a", None, &[]);
    assert!(!matches_category(&l, &CategoryFilter::parse("rust")));
}

// ========================================
// matches_search
// ========================================

#[test]
fn empty_query_matches_everything() {
    assert!(matches_search(&link("anything", None, &[]), ""));
}

#[test]
fn matches_title_substring_case_insensitively() {
    let l = link("The Rust Programming Language", None, &[]);
    assert!(matches_search(&l, "rust prog"));
}

#[test]
fn matches_description_substring() {
    let l = link("Tokio", Some("An asynchronous RUNTIME"), &[]);
    assert!(matches_search(&l, "runtime"));
}

#[test]
fn missing_description_is_empty() {
    let l = link("Tokio", None, &[]);
    assert!(!matches_search(&l, "runtime"));
}

#[test]
fn substring_not_word_matching() {
    let l = link("Serialization", None, &[]);
    assert!(matches_search(&l, "rial"));
}

#[test]
fn no_fuzzy_matching() {
    let l = link("Serde", None, &[]);
    assert!(!matches_search(&l, "srde"));
}

#[test]
fn query_may_span_title_and_description() {
    let l = link("Rust", Some("book"), &[]);
    assert!(matches_search(&l, "rust book"));
}

// ========================================
// matches
// ========================================

#[test]
fn both_predicates_must_hold() {
    let l = link("Tokio", Some("runtime"), &["async"]);
    assert!(matches(&l, &CategoryFilter::parse("async"), "tokio"));
    assert!(!matches(&l, &CategoryFilter::parse("web"), "tokio"));
    assert!(!matches(&l, &CategoryFilter::parse("async"), "actix"));
}
