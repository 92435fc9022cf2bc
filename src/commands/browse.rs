//! rabbithole browse コマンド
//!
//! カテゴリ切替・検索・ページ送りができる TUI を起動する。

use crate::catalog::{CategoryFilter, QueryState};
use crate::cli::GlobalArgs;
use crate::config::ConfigOverrides;
use crate::error::CatalogError;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Initial category id
    #[arg(long, short = 'c', default_value = "all")]
    pub category: CategoryFilter,

    /// Initial search text
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Links per page
    #[arg(long)]
    pub page_size: Option<usize>,
}

pub async fn run(args: Args, global: &GlobalArgs) -> Result<(), String> {
    let overrides = ConfigOverrides {
        page_size: args.page_size,
        ..ConfigOverrides::default()
    };
    let (config, db) = super::load_catalog(global, overrides).await?;

    let mut model = tui::Model::new(db, config);
    model.state = QueryState::new(args.category, args.search, 1);

    tui::run(&mut model).map_err(|e| CatalogError::Tui(e.to_string()).to_string())
}
