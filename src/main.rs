mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod http;
mod output;
mod source;
mod tui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.global.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// ログ出力を初期化（stderr）
///
/// `-v` 指定がなければ `RUST_LOG` を優先し、未設定なら warn のみ。
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,rabbithole=debug"),
        _ => EnvFilter::new("warn,rabbithole=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
