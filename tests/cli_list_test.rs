//! list / categories command integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn links_file(count: usize) -> NamedTempFile {
    let links: Vec<Value> = (1..=count)
        .map(|i| {
            let categories = if i % 2 == 0 { vec!["even"] } else { vec![] };
            serde_json::json!({
                "title": format!("item{i}"),
                "url": format!("https://example.com/{i}"),
                "description": if i == 7 { "Lucky number" } else { "" },
                "categories": categories,
            })
        })
        .collect();
    let doc = serde_json::json!({
        "categories": [{ "id": "even", "label": "Even" }],
        "links": links,
    });

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(doc.to_string().as_bytes()).unwrap();
    file
}

fn rabbithole() -> Command {
    let mut cmd = Command::cargo_bin("rabbithole").unwrap();
    cmd.env_remove("RABBITHOLE_DATA")
        .env_remove("RABBITHOLE_PAGE_SIZE")
        .env_remove("RABBITHOLE_MAX_RENDER")
        .env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_list_json_caps_and_paginates() {
    let file = links_file(150);
    let json = json_output(rabbithole().args([
        "list",
        "--data",
        file.path().to_str().unwrap(),
        "--json",
    ]));

    assert_eq!(json["total_all"], 150);
    assert_eq!(json["total_matched"], 150);
    assert_eq!(json["total_rendered"], 100);
    assert_eq!(json["total_pages"], 5);
    assert_eq!(json["page"], 1);
    assert_eq!(json["items"].as_array().unwrap().len(), 24);
    assert_eq!(json["items"][1]["title"], "item2");
    assert_eq!(json["at_first"], true);
    assert_eq!(json["at_last"], false);
}

#[test]
fn test_list_out_of_range_page_is_clamped() {
    let file = links_file(30);
    let json = json_output(rabbithole().args([
        "list",
        "--data",
        file.path().to_str().unwrap(),
        "--page",
        "99",
        "--json",
    ]));

    assert_eq!(json["page"], 2);
    assert_eq!(json["query"]["page"], 99);
    assert_eq!(json["at_last"], true);
}

#[test]
fn test_list_category_filter() {
    let file = links_file(10);
    let json = json_output(rabbithole().args([
        "list",
        "--data",
        file.path().to_str().unwrap(),
        "--category",
        "even",
        "--json",
    ]));

    assert_eq!(json["total_matched"], 5);
    assert_eq!(json["total_all"], 10);
}

#[test]
fn test_list_page_window_in_json() {
    let file = links_file(100);
    let json = json_output(rabbithole().args([
        "list",
        "--data",
        file.path().to_str().unwrap(),
        "--page-size",
        "5",
        "--page",
        "10",
        "--json",
    ]));

    assert_eq!(json["total_pages"], 20);
    let window: Vec<String> = json["window"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    assert_eq!(
        window,
        vec!["1", "…", "7", "8", "9", "10", "11", "12", "13", "…", "20"]
    );
}

#[test]
fn test_list_simple_search() {
    let file = links_file(12);
    rabbithole()
        .args([
            "list",
            "--data",
            file.path().to_str().unwrap(),
            "--search",
            "  ITEM1 ",
            "--simple",
        ])
        .assert()
        .success()
        .stdout("item1\nitem10\nitem11\nitem12\n");
}

#[test]
fn test_list_searches_description() {
    let file = links_file(12);
    rabbithole()
        .args([
            "list",
            "--data",
            file.path().to_str().unwrap(),
            "--search",
            "lucky",
            "--simple",
        ])
        .assert()
        .success()
        .stdout("item7\n");
}

#[test]
fn test_list_table_output() {
    let file = links_file(3);
    rabbithole()
        .args(["list", "--data", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rabbit Hole"))
        .stdout(predicate::str::contains("3 shown • 3 matched • 3 total"))
        .stdout(predicate::str::contains("Page 1 / 1"))
        .stdout(predicate::str::contains("Even"));
}

#[test]
fn test_list_no_match_message() {
    let file = links_file(3);
    rabbithole()
        .args([
            "list",
            "--data",
            file.path().to_str().unwrap(),
            "--search",
            "nothing here",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No links matched"))
        .stdout(predicate::str::contains("0 shown • 0 matched • 3 total"));
}

#[test]
fn test_list_missing_data_fails() {
    rabbithole()
        .args(["list", "--data", "/nonexistent/links.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load /nonexistent/links.json"));
}

#[test]
fn test_list_zero_page_size_fails() {
    let file = links_file(3);
    rabbithole()
        .args([
            "list",
            "--data",
            file.path().to_str().unwrap(),
            "--page-size",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_env_page_size() {
    let file = links_file(30);
    let json = json_output(
        rabbithole()
            .env("RABBITHOLE_PAGE_SIZE", "10")
            .args(["list", "--data", file.path().to_str().unwrap(), "--json"]),
    );
    assert_eq!(json["total_pages"], 3);
}

#[test]
fn test_config_file() {
    let file = links_file(30);
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "data = {:?}", file.path().to_str().unwrap()).unwrap();
    writeln!(config, "page_size = 6").unwrap();

    let json = json_output(rabbithole().args([
        "--config",
        config.path().to_str().unwrap(),
        "list",
        "--json",
    ]));
    assert_eq!(json["total_pages"], 5);
}

#[test]
fn test_categories_json() {
    let file = links_file(10);
    let json = json_output(rabbithole().args([
        "categories",
        "--data",
        file.path().to_str().unwrap(),
        "--json",
    ]));

    assert_eq!(json[0]["id"], "all");
    assert_eq!(json[0]["links"], 10);
    assert_eq!(json[1]["id"], "even");
    assert_eq!(json[1]["label"], "Even");
    assert_eq!(json[1]["links"], 5);
}
