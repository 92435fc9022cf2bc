use crate::catalog::LinkDb;
use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{CatalogConfig, ConfigOverrides, HttpConfig};
use crate::source::parse_source;

pub mod browse;
pub mod categories;
pub mod list;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::List(args) => list::run(args, &cli.global).await,
        Command::Categories(args) => categories::run(args, &cli.global).await,
        Command::Browse(args) => browse::run(args, &cli.global).await,
    }
}

/// 設定を確定してリンクデータを読み込む
pub(crate) async fn load_catalog(
    global: &GlobalArgs,
    mut overrides: ConfigOverrides,
) -> Result<(CatalogConfig, LinkDb), String> {
    overrides.data = global.data.clone();

    let config = CatalogConfig::resolve(global.config.as_deref(), &overrides)
        .map_err(|e| e.to_string())?;

    let source = parse_source(&config.data, &HttpConfig::default());
    let db = source
        .load()
        .await
        .map_err(|e| format!("Could not load {}: {}", source.describe(), e))?;

    tracing::info!(
        source = %source.describe(),
        links = db.links.len(),
        categories = db.categories.len(),
        "catalog loaded"
    );
    Ok((config, db))
}
