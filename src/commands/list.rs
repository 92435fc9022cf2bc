//! rabbithole list コマンド
//!
//! 絞り込み・ページングしたリンクを 1 ページ分表示する。

use crate::catalog::{self, CatalogView, CategoryFilter, LinkDb, LinkRecord, QueryState};
use crate::cli::GlobalArgs;
use crate::config::{CatalogConfig, ConfigOverrides};
use crate::output::{summary_line, PagerControls};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use std::io::IsTerminal;

#[derive(Debug, Parser)]
pub struct Args {
    /// Category id to filter by ("all" shows every category)
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,

    /// Case-insensitive text matched against title and description
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Page number (out-of-range values are clamped)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Links per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Maximum number of links reachable through paging
    #[arg(long)]
    pub max_render: Option<usize>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only link titles
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

/// JSON 出力用構造体
#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    title: &'a str,
    query: &'a QueryState,
    #[serde(flatten)]
    view: &'a CatalogView<'a>,
    at_first: bool,
    at_last: bool,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let overrides = ConfigOverrides {
        page_size: args.page_size,
        max_render: args.max_render,
        ..ConfigOverrides::default()
    };
    let (config, db) = super::load_catalog(global, overrides).await?;

    let state = QueryState::new(args.category.clone(), args.search.clone(), args.page);
    let view = catalog::view(&db.links, &state, config.pager(), &config.window);

    if args.json {
        print_json(&config, &state, &view)
    } else if args.simple {
        print_simple(&view);
        Ok(())
    } else {
        print_table(&config, &db, &view, std::io::stdout().is_terminal());
        Ok(())
    }
}

fn print_json(
    config: &CatalogConfig,
    state: &QueryState,
    view: &CatalogView<'_>,
) -> Result<(), String> {
    let output = ListOutput {
        title: &config.title,
        query: state,
        view,
        at_first: view.page.at_first(),
        at_last: view.page.at_last(),
    };
    serde_json::to_string_pretty(&output)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize links: {}", e))
}

fn print_simple(view: &CatalogView<'_>) {
    for link in &view.page.items {
        println!("{}", link.title);
    }
}

fn print_table(config: &CatalogConfig, db: &LinkDb, view: &CatalogView<'_>, color: bool) {
    println!("{}", config.title);

    if view.page.items.is_empty() {
        println!("{}", empty_message(view));
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Title", "URL", "Description", "Categories"]);

        for link in &view.page.items {
            table.add_row(card_row(db, link));
        }

        println!("{table}");
    }

    println!("{}", summary_line(view, color));

    let controls = PagerControls::from_view(view);
    let pager = if color {
        controls.colored()
    } else {
        controls.plain()
    };
    println!("{}  {}", view.page_info(), pager);
}

/// カード 1 枚分の行（カテゴリはラベル表示）
fn card_row(db: &LinkDb, link: &LinkRecord) -> Vec<String> {
    vec![
        link.title.clone(),
        link.url.clone(),
        link.description.clone().unwrap_or_default(),
        category_labels(db, link),
    ]
}

fn category_labels(db: &LinkDb, link: &LinkRecord) -> String {
    link.categories
        .iter()
        .map(|id| db.label_or_id(id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn empty_message(view: &CatalogView<'_>) -> &'static str {
    if view.page.total_all == 0 {
        "No links available"
    } else {
        "No links matched"
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
