use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{browse, categories, list};

#[derive(Debug, Parser)]
#[command(name = "rabbithole")]
#[command(about = "Searchable link catalog", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// 全サブコマンド共通のオプション
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct GlobalArgs {
    /// Path or http(s) URL of links.json [default: assets/json/links.json]
    #[arg(long, short = 'd', global = true)]
    pub data: Option<String>,

    /// Config file [default: ./rabbithole.toml when present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one page of links
    List(list::Args),

    /// Show categories and their link counts
    Categories(categories::Args),

    /// Browse links interactively
    Browse(browse::Args),
}
