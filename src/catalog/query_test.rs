use super::*;

fn titles<'a>(links: &[&'a LinkRecord]) -> Vec<&'a str> {
    links.iter().map(|l| l.title.as_str()).collect()
}

fn sample() -> Vec<LinkRecord> {
    vec![
        LinkRecord::new("banana", "u1").with_categories(["fruit"]),
        LinkRecord::new("Apple", "u2")
            .with_description("crunchy")
            .with_categories(["fruit", "red"]),
        LinkRecord::new("cherry", "u3").with_categories(["red"]),
        LinkRecord::new("item10", "u4"),
        LinkRecord::new("item2", "u5"),
    ]
}

#[test]
fn sorts_case_insensitively_and_numerically() {
    let links = sample();
    let result = filter_and_sort(&links, &CategoryFilter::All, "");
    assert_eq!(
        titles(&result),
        vec!["Apple", "banana", "cherry", "item2", "item10"]
    );
}

#[test]
fn sorts_accented_titles_with_their_base_letters() {
    let links: Vec<LinkRecord> = ["Zebra", "Émile", "éclair", "apple"]
        .into_iter()
        .map(|t| LinkRecord::new(t, "u"))
        .collect();
    let result = filter_and_sort(&links, &CategoryFilter::All, "");
    assert_eq!(titles(&result), vec!["apple", "éclair", "Émile", "Zebra"]);
}

#[test]
fn filters_by_category() {
    let links = sample();
    let result = filter_and_sort(&links, &CategoryFilter::parse("red"), "");
    assert_eq!(titles(&result), vec!["Apple", "cherry"]);
}

#[test]
fn filters_by_search_text_after_normalizing() {
    let links = sample();
    let result = filter_and_sort(&links, &CategoryFilter::All, "  CRUNCH ");
    assert_eq!(titles(&result), vec!["Apple"]);
}

#[test]
fn combines_category_and_search() {
    let links = sample();
    let result = filter_and_sort(&links, &CategoryFilter::parse("fruit"), "an");
    assert_eq!(titles(&result), vec!["banana"]);
}

#[test]
fn equal_titles_keep_original_order() {
    let links = vec![
        LinkRecord::new("Rust", "first"),
        LinkRecord::new("rust", "second"),
        LinkRecord::new("RUST", "third"),
    ];
    let result = filter_and_sort(&links, &CategoryFilter::All, "");
    let urls: Vec<&str> = result.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(urls, vec!["first", "second", "third"]);
}

#[test]
fn missing_title_sorts_as_empty() {
    let links = vec![LinkRecord::new("b", "u"), LinkRecord::new("", "untitled")];
    let result = filter_and_sort(&links, &CategoryFilter::All, "");
    assert_eq!(result[0].url, "untitled");
}

#[test]
fn query_reports_totals() {
    let links = sample();
    let result = query(&links, &CategoryFilter::parse("red"), "");
    assert_eq!(result.total_all, 5);
    assert_eq!(result.total_matched(), 2);
}

#[test]
fn empty_collection_yields_empty_result() {
    let result = query(&[], &CategoryFilter::All, "anything");
    assert_eq!(result.total_all, 0);
    assert_eq!(result.total_matched(), 0);
}

#[test]
fn unknown_category_matches_nothing() {
    let links = sample();
    let result = query(&links, &CategoryFilter::parse("nope"), "");
    assert_eq!(result.total_matched(), 0);
    assert_eq!(result.total_all, 5);
}

#[test]
fn refiltering_is_idempotent() {
    let links = sample();
    let category = CategoryFilter::parse("fruit");
    let first: Vec<LinkRecord> = filter_and_sort(&links, &category, "a")
        .into_iter()
        .cloned()
        .collect();
    let second = filter_and_sort(&first, &category, "a");
    assert_eq!(titles(&second), first.iter().map(|l| l.title.as_str()).collect::<Vec<_>>());
}
