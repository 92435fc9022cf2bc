//! rabbithole categories コマンド
//!
//! カテゴリ一覧とリンク件数を表示する。先頭は全件（`all`）。

use crate::catalog::model::ALL_CATEGORIES;
use crate::catalog::LinkDb;
use crate::cli::GlobalArgs;
use crate::config::ConfigOverrides;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CategoryRow<'a> {
    id: &'a str,
    label: &'a str,
    links: usize,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let (_config, db) = super::load_catalog(global, ConfigOverrides::default()).await?;
    let rows = category_rows(&db);

    if args.json {
        serde_json::to_string_pretty(&rows)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize categories: {}", e))
    } else {
        print_table(&rows);
        Ok(())
    }
}

fn category_rows(db: &LinkDb) -> Vec<CategoryRow<'_>> {
    let mut rows = vec![CategoryRow {
        id: ALL_CATEGORIES,
        label: "All",
        links: db.links.len(),
    }];
    rows.extend(db.category_counts().into_iter().map(|(c, links)| CategoryRow {
        id: &c.id,
        label: &c.label,
        links,
    }));
    rows
}

fn print_table(rows: &[CategoryRow<'_>]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Label", "Links"]);

    for row in rows {
        table.add_row(vec![row.id.to_string(), row.label.to_string(), row.links.to_string()]);
    }

    println!("{table}");
}

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;
